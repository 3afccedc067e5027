//! The standard factory set.

use wire::{
    BoolFormatter, F32Formatter, F64Formatter, I16Formatter, I8Formatter, StringFormatter,
    U16Formatter, U8Formatter, VarI32Formatter, VarI64Formatter, VarU32Formatter, VarU64Formatter,
};

use crate::factory::FactorySet;

impl FactorySet {
    /// The well-known default factories, as an explicit value.
    ///
    /// Constructed once at process start and handed to each
    /// `RegistryBuilder`; there is deliberately no process-wide mutable
    /// registry behind this.
    ///
    /// 32- and 64-bit integers default to the variable-length formatters
    /// because game-state counters are usually small; register the
    /// fixed-width formatters as overrides where wire size must be
    /// constant.
    #[must_use]
    pub fn standard() -> Self {
        let mut set = Self::empty();
        set.register_formatter::<bool, _, _>(|_| Ok(BoolFormatter));
        set.register_formatter::<u8, _, _>(|_| Ok(U8Formatter));
        set.register_formatter::<i8, _, _>(|_| Ok(I8Formatter));
        set.register_formatter::<u16, _, _>(|_| Ok(U16Formatter));
        set.register_formatter::<i16, _, _>(|_| Ok(I16Formatter));
        set.register_formatter::<u32, _, _>(|_| Ok(VarU32Formatter));
        set.register_formatter::<i32, _, _>(|_| Ok(VarI32Formatter));
        set.register_formatter::<u64, _, _>(|_| Ok(VarU64Formatter));
        set.register_formatter::<i64, _, _>(|_| Ok(VarI64Formatter));
        set.register_formatter::<f32, _, _>(|_| Ok(F32Formatter));
        set.register_formatter::<f64, _, _>(|_| Ok(F64Formatter));
        set.register_formatter::<String, _, _>(|_| Ok(StringFormatter));
        set.register_formatter::<Option<String>, _, _>(|_| Ok(StringFormatter));
        set
    }
}
