//! Financial charts: candlestick and OHLC.

use super::common::{Encoded, Theme, axis, base_layout};
use crate::Result;
use crate::core::{CandleKind, Candlestick, Color, Scale};
use serde_json::{Value, json};

pub fn encode_candlestick(candle: &Candlestick, theme: &Theme) -> Result<Encoded> {
    let n = candle.candles.len();
    let mut x = Vec::with_capacity(n);
    let mut open = Vec::with_capacity(n);
    let mut high = Vec::with_capacity(n);
    let mut low = Vec::with_capacity(n);
    let mut close = Vec::with_capacity(n);
    for c in &candle.candles {
        x.push(&c.x);
        open.push(c.open);
        high.push(c.high);
        low.push(c.low);
        close.push(c.close);
    }

    let trace_type = match candle.kind {
        CandleKind::Candlestick => "candlestick",
        CandleKind::Ohlc => "ohlc",
    };

    let trace = json!({
        "type": trace_type,
        "x": x,
        "open": open,
        "high": high,
        "low": low,
        "close": close,
        "increasing": direction(candle.kind, candle.up_color),
        "decreasing": direction(candle.kind, candle.down_color),
    });

    let mut layout = base_layout(&candle.meta, theme);
    layout["xaxis"] = axis(candle.x_label.as_deref(), Scale::Auto, theme);
    layout["xaxis"]["rangeslider"] = json!({ "visible": candle.range_slider });
    layout["yaxis"] = axis(candle.y_label.as_deref(), Scale::Auto, theme);

    Ok(Encoded {
        data: vec![trace],
        layout,
    })
}

fn direction(kind: CandleKind, color: Color) -> Value {
    match kind {
        CandleKind::Candlestick => json!({
            "line": { "color": color.to_css() },
            "fillcolor": color.to_css(),
        }),
        CandleKind::Ohlc => json!({ "line": { "color": color.to_css() } }),
    }
}
