//! Colour model: every pixel read resolves to 16-bit premultiplied RGBA
//!
//! Conversions follow the usual fixed-point formulas so 8-bit sources widen
//! by `× 0x101` and straight-alpha sources are premultiplied on the way in.

use image::Rgba;
use rand::Rng;

/// 16-bit premultiplied RGBA colour
pub type Rgba64 = Rgba<u16>;

/// Fully transparent black
pub const TRANSPARENT: Rgba64 = Rgba([0, 0, 0, 0]);

/// Widen an 8-bit sample to 16 bits
pub const fn widen(v: u8) -> u16 {
    (v as u16) * 0x101
}

/// 8-bit premultiplied RGBA
pub const fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Rgba64 {
    Rgba([widen(r), widen(g), widen(b), widen(a)])
}

/// 8-bit straight-alpha RGBA
pub fn from_nrgba8(r: u8, g: u8, b: u8, a: u8) -> Rgba64 {
    let alpha = a as u32;
    let premultiply = |v: u8| ((v as u32 * 0x101 * alpha) / 0xff) as u16;
    Rgba([premultiply(r), premultiply(g), premultiply(b), widen(a)])
}

/// 16-bit straight-alpha RGBA
pub fn from_nrgba16(r: u16, g: u16, b: u16, a: u16) -> Rgba64 {
    let alpha = a as u32;
    let premultiply = |v: u16| ((v as u32 * alpha) / 0xffff) as u16;
    Rgba([premultiply(r), premultiply(g), premultiply(b), a])
}

/// Opaque 16-bit gray
pub const fn from_gray16(v: u16) -> Rgba64 {
    Rgba([v, v, v, 0xffff])
}

/// 16-bit alpha-only sample
pub const fn from_alpha16(a: u16) -> Rgba64 {
    Rgba([a, a, a, a])
}

/// CMYK ink coverage to opaque RGB
pub fn from_cmyk(c: u8, m: u8, y: u8, k: u8) -> Rgba64 {
    let white = 0xffff - widen(k) as u32;
    let channel = |v: u8| ((0xffff - widen(v) as u32) * white / 0xffff) as u16;
    Rgba([channel(c), channel(m), channel(y), 0xffff])
}

/// Full-range YCbCr (JFIF) to opaque RGB in 16.16 fixed point
pub const fn from_ycbcr(y: u8, cb: u8, cr: u8) -> Rgba64 {
    let luma = y as i32 * 0x10101;
    let cb = cb as i32 - 128;
    let cr = cr as i32 - 128;
    Rgba([
        clamp_fixed(luma + 91_881 * cr),
        clamp_fixed(luma - 22_554 * cb - 46_802 * cr),
        clamp_fixed(luma + 116_130 * cb),
        0xffff,
    ])
}

/// YCbCr with a straight alpha sample
pub fn from_nycbcra(y: u8, cb: u8, cr: u8, a: u8) -> Rgba64 {
    let Rgba([r, g, b, _]) = from_ycbcr(y, cb, cr);
    let alpha = widen(a) as u32;
    let premultiply = |v: u16| ((v as u32 * alpha) / 0xffff) as u16;
    Rgba([premultiply(r), premultiply(g), premultiply(b), widen(a)])
}

/// Clamp a 16.16 fixed-point channel into `[0, 0xffff]`
const fn clamp_fixed(v: i32) -> u16 {
    if (v as u32) & 0xff00_0000 == 0 {
        (v >> 8) as u16
    } else {
        (!(v >> 31) & 0xffff) as u16
    }
}

/// Truncate to 8-bit premultiplied RGBA
pub const fn to_rgba8(c: Rgba64) -> Rgba<u8> {
    let Rgba([r, g, b, a]) = c;
    Rgba([(r >> 8) as u8, (g >> 8) as u8, (b >> 8) as u8, (a >> 8) as u8])
}

/// Undo premultiplication and truncate to 8-bit straight RGBA
pub fn to_nrgba8(c: Rgba64) -> Rgba<u8> {
    let Rgba([r, g, b, a]) = c;
    if a == 0 {
        return Rgba([0, 0, 0, 0]);
    }
    let alpha = a as u32;
    let straighten = |v: u16| {
        let v = (v as u32 * 0xffff / alpha).min(0xffff);
        (v >> 8) as u8
    };
    Rgba([straighten(r), straighten(g), straighten(b), (a >> 8) as u8])
}

/// Squared distance summed over the four 16-bit channels
pub fn color_distance(a: Rgba64, b: Rgba64) -> u64 {
    a.0.iter()
        .zip(b.0.iter())
        .map(|(&x, &y)| {
            let d = u64::from(x.abs_diff(y));
            d * d
        })
        .sum()
}

/// Uniformly random 16-bit channels, not necessarily premultiplied-valid
pub fn random_color<R: Rng>(rng: &mut R) -> Rgba64 {
    Rgba([rng.random(), rng.random(), rng.random(), rng.random()])
}
