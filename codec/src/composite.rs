//! Composite codecs assembled from field-level steps.

use std::any::type_name;
use std::fmt;
use std::sync::Arc;

use buffer::ByteBuffer;
use registry::{CodecRegistry, RegistryResult};
use schema::{layout_hash, FieldDef, LayoutBuilder, StructLayout};
use wire::{Codec, Formatter, WireError, WireResult};

type EncodeStep<T> = Box<dyn Fn(&T, &mut ByteBuffer) -> WireResult<()> + Send + Sync>;
type DecodeStep<T> = Box<dyn Fn(&mut T, &mut ByteBuffer) -> WireResult<()> + Send + Sync>;

struct FieldStep<T> {
    encode: EncodeStep<T>,
    decode: DecodeStep<T>,
}

/// A codec for a user composite type: a linear sequence of field steps,
/// each delegating to the codec of that field's declared type.
///
/// Field codecs are resolved through the registry when the composite is
/// built, so a factory producing one participates in registry resolution
/// like any other: a missing field codec stalls the factory until the
/// dependency exists.
///
/// Fields encode and decode in declaration order. That ordering is what
/// lets an array field read its element count from an earlier size field
/// of the half-decoded destination value.
pub struct CompositeCodec<T> {
    layout: StructLayout,
    hash: u64,
    steps: Vec<FieldStep<T>>,
}

impl<T: 'static> CompositeCodec<T> {
    /// Starts a builder for a composite codec of `T`.
    #[must_use]
    pub fn builder<'r>(type_name: &str, registry: &'r CodecRegistry) -> CompositeBuilder<'r, T> {
        CompositeBuilder {
            registry,
            layout: StructLayout::builder(type_name),
            steps: Vec::new(),
        }
    }
}

impl<T> CompositeCodec<T> {
    /// Returns the validated field layout.
    #[must_use]
    pub fn layout(&self) -> &StructLayout {
        &self.layout
    }

    /// Returns the deterministic layout hash for peer agreement checks.
    #[must_use]
    pub const fn layout_hash(&self) -> u64 {
        self.hash
    }
}

impl<T> Codec<T> for CompositeCodec<T> {
    fn encode(&self, value: &T, buf: &mut ByteBuffer) -> WireResult<()> {
        for step in &self.steps {
            (step.encode)(value, buf)?;
        }
        Ok(())
    }

    fn decode(&self, buf: &mut ByteBuffer, dest: &mut T) -> WireResult<()> {
        for step in &self.steps {
            (step.decode)(dest, buf)?;
        }
        Ok(())
    }
}

impl<T> fmt::Debug for CompositeCodec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompositeCodec")
            .field("layout", &self.layout)
            .finish_non_exhaustive()
    }
}

/// Builder for [`CompositeCodec`].
///
/// Each field method resolves the field type's codec immediately; the
/// resulting [`CodecNotFound`](registry::RegistryError::CodecNotFound) for
/// a not-yet-built nested type is exactly the retry signal the registry's
/// resolution loop understands. `build` validates the accumulated layout,
/// rejecting size fields that are missing, late, or non-scalar.
pub struct CompositeBuilder<'r, T> {
    registry: &'r CodecRegistry,
    layout: LayoutBuilder,
    steps: Vec<FieldStep<T>>,
}

impl<T: 'static> CompositeBuilder<'_, T> {
    /// Adds a scalar field of any registered type, composites included.
    pub fn scalar<F, G, M>(mut self, name: &str, get: G, get_mut: M) -> RegistryResult<Self>
    where
        F: 'static,
        G: Fn(&T) -> &F + Send + Sync + 'static,
        M: Fn(&mut T) -> &mut F + Send + Sync + 'static,
    {
        let codec = self.registry.get::<F>()?;
        self.layout = self.layout.field(FieldDef::scalar(name, type_name::<F>()));

        let encode_codec = Arc::clone(&codec);
        self.steps.push(FieldStep {
            encode: Box::new(move |value, buf| encode_codec.encode(get(value), buf)),
            decode: Box::new(move |dest, buf| codec.decode(buf, get_mut(dest))),
        });
        Ok(self)
    }

    /// Adds a `Vec` field whose length lives in an earlier scalar field.
    ///
    /// `count` reads the size field from the (possibly half-decoded)
    /// value; on encode the declared count must equal the element count.
    pub fn array<F, C, G, M>(
        mut self,
        name: &str,
        size_field: &str,
        count: C,
        get: G,
        get_mut: M,
    ) -> RegistryResult<Self>
    where
        F: Default + 'static,
        C: Fn(&T) -> usize + Send + Sync + 'static,
        G: Fn(&T) -> &Vec<F> + Send + Sync + 'static,
        M: Fn(&mut T) -> &mut Vec<F> + Send + Sync + 'static,
    {
        let codec = self.registry.get::<F>()?;
        let formatter = self.registry.formatter::<F>();
        self.layout = self
            .layout
            .field(FieldDef::array(name, type_name::<F>(), size_field));

        let decode_codec = Arc::clone(&codec);
        let count = Arc::new(count);
        let encode_count = Arc::clone(&count);
        let encode_formatter = formatter.clone();
        self.steps.push(FieldStep {
            encode: Box::new(move |value, buf| {
                let values = get(value);
                let declared = (*encode_count)(value);
                if declared != values.len() {
                    return Err(WireError::LengthMismatch {
                        expected: declared,
                        actual: values.len(),
                    });
                }
                match &encode_formatter {
                    Some(fmt) => fmt.write_slice(values, buf),
                    None => {
                        for item in values {
                            codec.encode(item, buf)?;
                        }
                        Ok(())
                    }
                }
            }),
            decode: Box::new(move |dest, buf| {
                let declared = (*count)(dest);
                let values = match &formatter {
                    Some(fmt) => fmt.read_vec(buf, declared)?,
                    None => {
                        // Capacity is clamped to the readable byte count so
                        // a hostile size field cannot force a huge
                        // allocation before decoding fails.
                        let mut values = Vec::with_capacity(declared.min(buf.remaining_data()));
                        for _ in 0..declared {
                            let mut item = F::default();
                            decode_codec.decode(buf, &mut item)?;
                            values.push(item);
                        }
                        values
                    }
                };
                *get_mut(dest) = values;
                Ok(())
            }),
        });
        Ok(self)
    }

    /// Adds a fixed-length array field.
    pub fn fixed_array<F, const N: usize, G, M>(
        mut self,
        name: &str,
        get: G,
        get_mut: M,
    ) -> RegistryResult<Self>
    where
        F: 'static,
        G: Fn(&T) -> &[F; N] + Send + Sync + 'static,
        M: Fn(&mut T) -> &mut [F; N] + Send + Sync + 'static,
    {
        let codec = self.registry.get::<F>()?;
        let formatter = self.registry.formatter::<F>();
        self.layout = self
            .layout
            .field(FieldDef::fixed_array(name, type_name::<F>(), N));

        let encode_codec = Arc::clone(&codec);
        let encode_formatter = formatter.clone();
        self.steps.push(FieldStep {
            encode: Box::new(move |value, buf| match &encode_formatter {
                Some(fmt) => fmt.write_slice(get(value), buf),
                None => {
                    for item in get(value) {
                        encode_codec.encode(item, buf)?;
                    }
                    Ok(())
                }
            }),
            decode: Box::new(move |dest, buf| match &formatter {
                Some(fmt) => fmt.read_slice(buf, get_mut(dest)),
                None => {
                    for slot in get_mut(dest).iter_mut() {
                        codec.decode(buf, slot)?;
                    }
                    Ok(())
                }
            }),
        });
        Ok(self)
    }

    /// Validates the layout and finishes the codec.
    pub fn build(self) -> RegistryResult<CompositeCodec<T>> {
        let layout = self.layout.build()?;
        let hash = layout_hash(&layout);
        Ok(CompositeCodec {
            layout,
            hash,
            steps: self.steps,
        })
    }
}
