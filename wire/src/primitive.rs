//! Fixed-width big-endian formatters for primitive values.
//!
//! Each formatter is a stateless unit struct. The checked `read`/`write`
//! assert exactly [`FixedFormatter::WIDTH`] bytes and delegate to the
//! unchecked transfer; the batch methods hoist one assertion above the
//! whole run. Floating point formatters reinterpret the bit pattern of the
//! matching-width integer formatter rather than defining an encoding of
//! their own.

use buffer::ByteBuffer;

use crate::error::WireResult;
use crate::traits::{
    read_slice_fixed, read_vec_fixed, write_slice_fixed, FixedFormatter, Formatter,
};

/// Formatter for `bool`, one byte on the wire.
///
/// Writes `1` for `true` and `0` for `false`; any non-zero byte decodes
/// to `true`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BoolFormatter;

impl Formatter<bool> for BoolFormatter {
    fn read(&self, buf: &mut ByteBuffer) -> WireResult<bool> {
        buf.ensure_data(Self::WIDTH)?;
        Ok(self.read_unchecked(buf))
    }

    fn write(&self, value: &bool, buf: &mut ByteBuffer) -> WireResult<()> {
        buf.ensure_free_space(Self::WIDTH)?;
        self.write_unchecked(value, buf);
        Ok(())
    }

    fn write_slice(&self, values: &[bool], buf: &mut ByteBuffer) -> WireResult<()> {
        write_slice_fixed(self, values, buf)
    }

    fn read_slice(&self, buf: &mut ByteBuffer, dest: &mut [bool]) -> WireResult<()> {
        read_slice_fixed(self, buf, dest)
    }

    fn read_vec(&self, buf: &mut ByteBuffer, count: usize) -> WireResult<Vec<bool>> {
        read_vec_fixed(self, buf, count)
    }
}

impl FixedFormatter<bool> for BoolFormatter {
    const WIDTH: usize = 1;

    fn read_unchecked(&self, buf: &mut ByteBuffer) -> bool {
        buf.read_u8_unchecked() != 0
    }

    fn write_unchecked(&self, value: &bool, buf: &mut ByteBuffer) {
        buf.write_u8_unchecked(u8::from(*value));
    }
}

/// Formatter for `u8`.
#[derive(Debug, Clone, Copy, Default)]
pub struct U8Formatter;

impl Formatter<u8> for U8Formatter {
    fn read(&self, buf: &mut ByteBuffer) -> WireResult<u8> {
        buf.ensure_data(Self::WIDTH)?;
        Ok(self.read_unchecked(buf))
    }

    fn write(&self, value: &u8, buf: &mut ByteBuffer) -> WireResult<()> {
        buf.ensure_free_space(Self::WIDTH)?;
        self.write_unchecked(value, buf);
        Ok(())
    }

    fn write_slice(&self, values: &[u8], buf: &mut ByteBuffer) -> WireResult<()> {
        // A run of bytes is already its own wire representation.
        buf.ensure_free_space(values.len())?;
        buf.write_bytes_unchecked(values);
        Ok(())
    }

    fn read_slice(&self, buf: &mut ByteBuffer, dest: &mut [u8]) -> WireResult<()> {
        buf.ensure_data(dest.len())?;
        dest.copy_from_slice(buf.read_bytes_unchecked(dest.len()));
        Ok(())
    }

    fn read_vec(&self, buf: &mut ByteBuffer, count: usize) -> WireResult<Vec<u8>> {
        buf.ensure_data(count)?;
        Ok(buf.read_bytes_unchecked(count).to_vec())
    }
}

impl FixedFormatter<u8> for U8Formatter {
    const WIDTH: usize = 1;

    fn read_unchecked(&self, buf: &mut ByteBuffer) -> u8 {
        buf.read_u8_unchecked()
    }

    fn write_unchecked(&self, value: &u8, buf: &mut ByteBuffer) {
        buf.write_u8_unchecked(*value);
    }
}

/// Formatter for `i8`.
#[derive(Debug, Clone, Copy, Default)]
pub struct I8Formatter;

impl Formatter<i8> for I8Formatter {
    fn read(&self, buf: &mut ByteBuffer) -> WireResult<i8> {
        buf.ensure_data(Self::WIDTH)?;
        Ok(self.read_unchecked(buf))
    }

    fn write(&self, value: &i8, buf: &mut ByteBuffer) -> WireResult<()> {
        buf.ensure_free_space(Self::WIDTH)?;
        self.write_unchecked(value, buf);
        Ok(())
    }

    fn write_slice(&self, values: &[i8], buf: &mut ByteBuffer) -> WireResult<()> {
        write_slice_fixed(self, values, buf)
    }

    fn read_slice(&self, buf: &mut ByteBuffer, dest: &mut [i8]) -> WireResult<()> {
        read_slice_fixed(self, buf, dest)
    }

    fn read_vec(&self, buf: &mut ByteBuffer, count: usize) -> WireResult<Vec<i8>> {
        read_vec_fixed(self, buf, count)
    }
}

impl FixedFormatter<i8> for I8Formatter {
    const WIDTH: usize = 1;

    fn read_unchecked(&self, buf: &mut ByteBuffer) -> i8 {
        i8::from_be_bytes(buf.read_array_unchecked())
    }

    fn write_unchecked(&self, value: &i8, buf: &mut ByteBuffer) {
        buf.write_array_unchecked(value.to_be_bytes());
    }
}

/// Formatter for `u16`, big-endian.
#[derive(Debug, Clone, Copy, Default)]
pub struct U16Formatter;

impl Formatter<u16> for U16Formatter {
    fn read(&self, buf: &mut ByteBuffer) -> WireResult<u16> {
        buf.ensure_data(Self::WIDTH)?;
        Ok(self.read_unchecked(buf))
    }

    fn write(&self, value: &u16, buf: &mut ByteBuffer) -> WireResult<()> {
        buf.ensure_free_space(Self::WIDTH)?;
        self.write_unchecked(value, buf);
        Ok(())
    }

    fn write_slice(&self, values: &[u16], buf: &mut ByteBuffer) -> WireResult<()> {
        write_slice_fixed(self, values, buf)
    }

    fn read_slice(&self, buf: &mut ByteBuffer, dest: &mut [u16]) -> WireResult<()> {
        read_slice_fixed(self, buf, dest)
    }

    fn read_vec(&self, buf: &mut ByteBuffer, count: usize) -> WireResult<Vec<u16>> {
        read_vec_fixed(self, buf, count)
    }
}

impl FixedFormatter<u16> for U16Formatter {
    const WIDTH: usize = 2;

    fn read_unchecked(&self, buf: &mut ByteBuffer) -> u16 {
        u16::from_be_bytes(buf.read_array_unchecked())
    }

    fn write_unchecked(&self, value: &u16, buf: &mut ByteBuffer) {
        buf.write_array_unchecked(value.to_be_bytes());
    }
}

/// Formatter for `i16`, big-endian.
#[derive(Debug, Clone, Copy, Default)]
pub struct I16Formatter;

impl Formatter<i16> for I16Formatter {
    fn read(&self, buf: &mut ByteBuffer) -> WireResult<i16> {
        buf.ensure_data(Self::WIDTH)?;
        Ok(self.read_unchecked(buf))
    }

    fn write(&self, value: &i16, buf: &mut ByteBuffer) -> WireResult<()> {
        buf.ensure_free_space(Self::WIDTH)?;
        self.write_unchecked(value, buf);
        Ok(())
    }

    fn write_slice(&self, values: &[i16], buf: &mut ByteBuffer) -> WireResult<()> {
        write_slice_fixed(self, values, buf)
    }

    fn read_slice(&self, buf: &mut ByteBuffer, dest: &mut [i16]) -> WireResult<()> {
        read_slice_fixed(self, buf, dest)
    }

    fn read_vec(&self, buf: &mut ByteBuffer, count: usize) -> WireResult<Vec<i16>> {
        read_vec_fixed(self, buf, count)
    }
}

impl FixedFormatter<i16> for I16Formatter {
    const WIDTH: usize = 2;

    fn read_unchecked(&self, buf: &mut ByteBuffer) -> i16 {
        i16::from_be_bytes(buf.read_array_unchecked())
    }

    fn write_unchecked(&self, value: &i16, buf: &mut ByteBuffer) {
        buf.write_array_unchecked(value.to_be_bytes());
    }
}

/// Formatter for `u32`, big-endian.
#[derive(Debug, Clone, Copy, Default)]
pub struct U32Formatter;

impl Formatter<u32> for U32Formatter {
    fn read(&self, buf: &mut ByteBuffer) -> WireResult<u32> {
        buf.ensure_data(Self::WIDTH)?;
        Ok(self.read_unchecked(buf))
    }

    fn write(&self, value: &u32, buf: &mut ByteBuffer) -> WireResult<()> {
        buf.ensure_free_space(Self::WIDTH)?;
        self.write_unchecked(value, buf);
        Ok(())
    }

    fn write_slice(&self, values: &[u32], buf: &mut ByteBuffer) -> WireResult<()> {
        write_slice_fixed(self, values, buf)
    }

    fn read_slice(&self, buf: &mut ByteBuffer, dest: &mut [u32]) -> WireResult<()> {
        read_slice_fixed(self, buf, dest)
    }

    fn read_vec(&self, buf: &mut ByteBuffer, count: usize) -> WireResult<Vec<u32>> {
        read_vec_fixed(self, buf, count)
    }
}

impl FixedFormatter<u32> for U32Formatter {
    const WIDTH: usize = 4;

    fn read_unchecked(&self, buf: &mut ByteBuffer) -> u32 {
        u32::from_be_bytes(buf.read_array_unchecked())
    }

    fn write_unchecked(&self, value: &u32, buf: &mut ByteBuffer) {
        buf.write_array_unchecked(value.to_be_bytes());
    }
}

/// Formatter for `i32`, big-endian.
#[derive(Debug, Clone, Copy, Default)]
pub struct I32Formatter;

impl Formatter<i32> for I32Formatter {
    fn read(&self, buf: &mut ByteBuffer) -> WireResult<i32> {
        buf.ensure_data(Self::WIDTH)?;
        Ok(self.read_unchecked(buf))
    }

    fn write(&self, value: &i32, buf: &mut ByteBuffer) -> WireResult<()> {
        buf.ensure_free_space(Self::WIDTH)?;
        self.write_unchecked(value, buf);
        Ok(())
    }

    fn write_slice(&self, values: &[i32], buf: &mut ByteBuffer) -> WireResult<()> {
        write_slice_fixed(self, values, buf)
    }

    fn read_slice(&self, buf: &mut ByteBuffer, dest: &mut [i32]) -> WireResult<()> {
        read_slice_fixed(self, buf, dest)
    }

    fn read_vec(&self, buf: &mut ByteBuffer, count: usize) -> WireResult<Vec<i32>> {
        read_vec_fixed(self, buf, count)
    }
}

impl FixedFormatter<i32> for I32Formatter {
    const WIDTH: usize = 4;

    fn read_unchecked(&self, buf: &mut ByteBuffer) -> i32 {
        i32::from_be_bytes(buf.read_array_unchecked())
    }

    fn write_unchecked(&self, value: &i32, buf: &mut ByteBuffer) {
        buf.write_array_unchecked(value.to_be_bytes());
    }
}

/// Formatter for `u64`, big-endian.
#[derive(Debug, Clone, Copy, Default)]
pub struct U64Formatter;

impl Formatter<u64> for U64Formatter {
    fn read(&self, buf: &mut ByteBuffer) -> WireResult<u64> {
        buf.ensure_data(Self::WIDTH)?;
        Ok(self.read_unchecked(buf))
    }

    fn write(&self, value: &u64, buf: &mut ByteBuffer) -> WireResult<()> {
        buf.ensure_free_space(Self::WIDTH)?;
        self.write_unchecked(value, buf);
        Ok(())
    }

    fn write_slice(&self, values: &[u64], buf: &mut ByteBuffer) -> WireResult<()> {
        write_slice_fixed(self, values, buf)
    }

    fn read_slice(&self, buf: &mut ByteBuffer, dest: &mut [u64]) -> WireResult<()> {
        read_slice_fixed(self, buf, dest)
    }

    fn read_vec(&self, buf: &mut ByteBuffer, count: usize) -> WireResult<Vec<u64>> {
        read_vec_fixed(self, buf, count)
    }
}

impl FixedFormatter<u64> for U64Formatter {
    const WIDTH: usize = 8;

    fn read_unchecked(&self, buf: &mut ByteBuffer) -> u64 {
        u64::from_be_bytes(buf.read_array_unchecked())
    }

    fn write_unchecked(&self, value: &u64, buf: &mut ByteBuffer) {
        buf.write_array_unchecked(value.to_be_bytes());
    }
}

/// Formatter for `i64`, big-endian.
#[derive(Debug, Clone, Copy, Default)]
pub struct I64Formatter;

impl Formatter<i64> for I64Formatter {
    fn read(&self, buf: &mut ByteBuffer) -> WireResult<i64> {
        buf.ensure_data(Self::WIDTH)?;
        Ok(self.read_unchecked(buf))
    }

    fn write(&self, value: &i64, buf: &mut ByteBuffer) -> WireResult<()> {
        buf.ensure_free_space(Self::WIDTH)?;
        self.write_unchecked(value, buf);
        Ok(())
    }

    fn write_slice(&self, values: &[i64], buf: &mut ByteBuffer) -> WireResult<()> {
        write_slice_fixed(self, values, buf)
    }

    fn read_slice(&self, buf: &mut ByteBuffer, dest: &mut [i64]) -> WireResult<()> {
        read_slice_fixed(self, buf, dest)
    }

    fn read_vec(&self, buf: &mut ByteBuffer, count: usize) -> WireResult<Vec<i64>> {
        read_vec_fixed(self, buf, count)
    }
}

impl FixedFormatter<i64> for I64Formatter {
    const WIDTH: usize = 8;

    fn read_unchecked(&self, buf: &mut ByteBuffer) -> i64 {
        i64::from_be_bytes(buf.read_array_unchecked())
    }

    fn write_unchecked(&self, value: &i64, buf: &mut ByteBuffer) {
        buf.write_array_unchecked(value.to_be_bytes());
    }
}

/// Formatter for `f32`.
///
/// The bit pattern travels through [`U32Formatter`]; there is no separate
/// floating point encoding, so NaN payloads and signed zeros survive the
/// round trip exactly.
#[derive(Debug, Clone, Copy, Default)]
pub struct F32Formatter;

impl Formatter<f32> for F32Formatter {
    fn read(&self, buf: &mut ByteBuffer) -> WireResult<f32> {
        buf.ensure_data(Self::WIDTH)?;
        Ok(self.read_unchecked(buf))
    }

    fn write(&self, value: &f32, buf: &mut ByteBuffer) -> WireResult<()> {
        buf.ensure_free_space(Self::WIDTH)?;
        self.write_unchecked(value, buf);
        Ok(())
    }

    fn write_slice(&self, values: &[f32], buf: &mut ByteBuffer) -> WireResult<()> {
        write_slice_fixed(self, values, buf)
    }

    fn read_slice(&self, buf: &mut ByteBuffer, dest: &mut [f32]) -> WireResult<()> {
        read_slice_fixed(self, buf, dest)
    }

    fn read_vec(&self, buf: &mut ByteBuffer, count: usize) -> WireResult<Vec<f32>> {
        read_vec_fixed(self, buf, count)
    }
}

impl FixedFormatter<f32> for F32Formatter {
    const WIDTH: usize = 4;

    fn read_unchecked(&self, buf: &mut ByteBuffer) -> f32 {
        f32::from_bits(U32Formatter.read_unchecked(buf))
    }

    fn write_unchecked(&self, value: &f32, buf: &mut ByteBuffer) {
        U32Formatter.write_unchecked(&value.to_bits(), buf);
    }
}

/// Formatter for `f64`, bit-reinterpreted through [`U64Formatter`].
#[derive(Debug, Clone, Copy, Default)]
pub struct F64Formatter;

impl Formatter<f64> for F64Formatter {
    fn read(&self, buf: &mut ByteBuffer) -> WireResult<f64> {
        buf.ensure_data(Self::WIDTH)?;
        Ok(self.read_unchecked(buf))
    }

    fn write(&self, value: &f64, buf: &mut ByteBuffer) -> WireResult<()> {
        buf.ensure_free_space(Self::WIDTH)?;
        self.write_unchecked(value, buf);
        Ok(())
    }

    fn write_slice(&self, values: &[f64], buf: &mut ByteBuffer) -> WireResult<()> {
        write_slice_fixed(self, values, buf)
    }

    fn read_slice(&self, buf: &mut ByteBuffer, dest: &mut [f64]) -> WireResult<()> {
        read_slice_fixed(self, buf, dest)
    }

    fn read_vec(&self, buf: &mut ByteBuffer, count: usize) -> WireResult<Vec<f64>> {
        read_vec_fixed(self, buf, count)
    }
}

impl FixedFormatter<f64> for F64Formatter {
    const WIDTH: usize = 8;

    fn read_unchecked(&self, buf: &mut ByteBuffer) -> f64 {
        f64::from_bits(U64Formatter.read_unchecked(buf))
    }

    fn write_unchecked(&self, value: &f64, buf: &mut ByteBuffer) {
        U64Formatter.write_unchecked(&value.to_bits(), buf);
    }
}
