//! Binary encoding of overlay style and base fields
//!
//! Layout, all integers big-endian:
//!
//! | field               | encoding                              |
//! |---------------------|---------------------------------------|
//! | alpha               | `i32`                                 |
//! | fill colour         | 3 bytes, r g b                        |
//! | line colour         | 3 bytes, r g b                        |
//! | line width          | `f64` (IEEE 754)                      |
//! | line style          | string: `u32` length + UTF-8 name     |
//! | start arrow style   | string                                |
//! | end arrow style     | string                                |
//! | base fields         | written by the enclosing entity       |
//!
//! Enum fields are written by symbolic name so the format survives a
//! reordering of the variants. Colours and numbers are raw values.

use bytes::{Buf, BufMut, Bytes, BytesMut};
use metrics::counter;

use super::style::{ArrowStyle, ColorRGB, LineStyle, Style, Symbolic};
use super::types::{OverlayError, Result};

/// Types with a stable binary form
pub trait Externalizable: Sized {
    fn write_external<B: BufMut>(&self, out: &mut B);

    fn read_external<B: Buf>(input: &mut B) -> Result<Self>;
}

impl Externalizable for Style {
    fn write_external<B: BufMut>(&self, out: &mut B) {
        out.put_i32(self.alpha);
        put_color(out, self.fill_color);
        put_color(out, self.line_color);
        out.put_f64(self.line_width);
        put_str(out, self.line_style.name());
        put_str(out, self.start_arrow_style.name());
        put_str(out, self.end_arrow_style.name());
    }

    fn read_external<B: Buf>(input: &mut B) -> Result<Self> {
        need(input, 4, "alpha")?;
        let alpha = input.get_i32();
        let fill_color = get_color(input, "fill colour")?;
        let line_color = get_color(input, "line colour")?;
        need(input, 8, "line width")?;
        let line_width = input.get_f64();
        let line_style = LineStyle::parse_name(&get_str(input, "line style")?)?;
        let start_arrow_style = ArrowStyle::parse_name(&get_str(input, "start arrow style")?)?;
        let end_arrow_style = ArrowStyle::parse_name(&get_str(input, "end arrow style")?)?;

        Ok(Style {
            alpha,
            fill_color,
            line_color,
            line_width,
            line_style,
            start_arrow_style,
            end_arrow_style,
        })
    }
}

impl Style {
    /// Encode this style on its own
    pub fn to_bytes(&self) -> Bytes {
        encode(self)
    }

    /// Decode a style written by [`Style::to_bytes`]
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        decode(data)
    }
}

/// Encode any externalizable value into a fresh buffer
pub fn encode<T: Externalizable>(value: &T) -> Bytes {
    let mut out = BytesMut::new();
    value.write_external(&mut out);
    counter!("calibra_codec_bytes_total", "direction" => "encode").increment(out.len() as u64);
    out.freeze()
}

/// Decode a value that must span all of `data`
pub fn decode<T: Externalizable>(mut data: &[u8]) -> Result<T> {
    let len = data.len();
    let value = T::read_external(&mut data)?;
    if data.has_remaining() {
        return Err(OverlayError::InvalidFormat(format!(
            "{} trailing bytes after record",
            data.remaining()
        )));
    }
    counter!("calibra_codec_bytes_total", "direction" => "decode").increment(len as u64);
    Ok(value)
}

pub fn put_str<B: BufMut>(out: &mut B, value: &str) {
    out.put_u32(value.len() as u32);
    out.put_slice(value.as_bytes());
}

pub fn get_str<B: Buf>(input: &mut B, field: &str) -> Result<String> {
    need(input, 4, field)?;
    let len = input.get_u32() as usize;
    need(input, len, field)?;
    let mut raw = vec![0; len];
    input.copy_to_slice(&mut raw);
    String::from_utf8(raw)
        .map_err(|_| OverlayError::InvalidFormat(format!("{field} is not valid UTF-8")))
}

fn put_color<B: BufMut>(out: &mut B, color: ColorRGB) {
    out.put_slice(&[color.red, color.green, color.blue]);
}

fn get_color<B: Buf>(input: &mut B, field: &str) -> Result<ColorRGB> {
    need(input, 3, field)?;
    Ok(ColorRGB::new(input.get_u8(), input.get_u8(), input.get_u8()))
}

fn need<B: Buf>(input: &B, len: usize, field: &str) -> Result<()> {
    if input.remaining() < len {
        return Err(OverlayError::InvalidFormat(format!(
            "truncated {field}: need {len} bytes, {} left",
            input.remaining()
        )));
    }
    Ok(())
}
