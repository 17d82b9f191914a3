/// One named value of an [`Enumeration`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Variant {
    pub name: &'static str,
    pub bits: u64,
}

impl Variant {
    pub const fn new(name: &'static str, bits: u64) -> Self {
        Self { name, bits }
    }

    /// A variant with exactly one bit set names a single flag.
    #[inline]
    pub const fn is_single_flag(&self) -> bool {
        self.bits.is_power_of_two()
    }
}

/// A value with a finite set of named states, each backed by a raw bit pattern.
///
/// Plain fieldless enums implement this through [`enumeration!`](crate::enumeration);
/// `bitflags` types through [`flags_enumeration!`](crate::flags_enumeration), which
/// is what makes the [`EnumFlags`](super::EnumFlags) display mode meaningful:
/// arbitrary combinations of flags are representable there.
pub trait Enumeration: Sized + 'static {
    /// Named values in declaration order.
    fn variants() -> Vec<Variant>;

    fn to_raw(&self) -> u64;

    /// `None` when `bits` is not a representable value of the type.
    fn from_raw(bits: u64) -> Option<Self>;
}

/// Flips `flag` in `bits`: clears it when fully set, sets it otherwise.
///
/// Only the bits of `flag` are touched.
#[inline]
pub fn toggle_flag(bits: u64, flag: u64) -> u64 {
    if bits & flag == flag { bits & !flag } else { bits | flag }
}

/// Comma separated names of the single-bit flags set in `bits`.
///
/// Bits not covered by a named flag are appended as a hex literal. A zero
/// value previews as `none_label`.
pub fn flags_preview(variants: &[Variant], bits: u64, none_label: &str) -> String {
    if bits == 0 {
        return none_label.to_string();
    }

    let mut names = Vec::new();
    let mut covered = 0u64;
    for v in variants.iter().filter(|v| v.is_single_flag()) {
        if bits & v.bits == v.bits && covered & v.bits == 0 {
            names.push(v.name.to_string());
            covered |= v.bits;
        }
    }

    let rest = bits & !covered;
    if rest != 0 {
        names.push(format!("{rest:#x}"));
    }
    names.join(",")
}

/// Implements [`Enumeration`] and [`Inspect`](crate::render::Inspect) for a
/// fieldless enum.
///
/// ```rust,ignore
/// #[derive(Clone, Copy)]
/// enum Shading { Solid = 0, Wireframe = 1, Points = 2 }
///
/// nabu_inspect::enumeration!(Shading { Solid, Wireframe, Points });
/// ```
#[macro_export]
macro_rules! enumeration {
    ($ty:ident { $($variant:ident),+ $(,)? }) => {
        impl $crate::reflect::Enumeration for $ty {
            fn variants() -> ::std::vec::Vec<$crate::reflect::Variant> {
                ::std::vec![$($crate::reflect::Variant::new(stringify!($variant), $ty::$variant as u64)),+]
            }

            fn to_raw(&self) -> u64 {
                *self as u64
            }

            fn from_raw(bits: u64) -> ::std::option::Option<Self> {
                $(
                    if bits == $ty::$variant as u64 {
                        return ::std::option::Option::Some($ty::$variant);
                    }
                )+
                ::std::option::Option::None
            }
        }

        impl $crate::render::Inspect for $ty {
            const KIND: $crate::reflect::ValueKind = $crate::reflect::ValueKind::Enum;

            fn inspect(
                &mut self,
                ui: &mut dyn $crate::backend::WidgetBackend,
                meta: &$crate::render::Metadata<'_>,
            ) -> bool {
                $crate::render::inspect_enum(self, ui, meta)
            }
        }
    };
}

/// Implements [`Enumeration`] and [`Inspect`](crate::render::Inspect) for a
/// type declared with `bitflags!`.
///
/// Named flags come from the type's `FLAGS` table; any combination of known
/// bits round-trips.
#[macro_export]
macro_rules! flags_enumeration {
    ($ty:ty) => {
        impl $crate::reflect::Enumeration for $ty {
            fn variants() -> ::std::vec::Vec<$crate::reflect::Variant> {
                <$ty as $crate::bitflags::Flags>::FLAGS
                    .iter()
                    .map(|flag| $crate::reflect::Variant::new(flag.name(), u64::from(flag.value().bits())))
                    .collect()
            }

            fn to_raw(&self) -> u64 {
                u64::from(self.bits())
            }

            fn from_raw(bits: u64) -> ::std::option::Option<Self> {
                <$ty>::from_bits(::std::convert::TryFrom::try_from(bits).ok()?)
            }
        }

        impl $crate::render::Inspect for $ty {
            const KIND: $crate::reflect::ValueKind = $crate::reflect::ValueKind::Enum;

            fn inspect(
                &mut self,
                ui: &mut dyn $crate::backend::WidgetBackend,
                meta: &$crate::render::Metadata<'_>,
            ) -> bool {
                $crate::render::inspect_enum(self, ui, meta)
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    const VARIANTS: &[Variant] = &[
        Variant::new("Zero", 0),
        Variant::new("One", 1),
        Variant::new("Two", 2),
        Variant::new("Four", 4),
        Variant::new("Eight", 8),
        Variant::new("Ten", 10),
    ];

    #[test]
    fn toggle_set_bit_clears_only_that_bit() {
        assert_eq!(toggle_flag(0b1011, 0b0010), 0b1001);
    }

    #[test]
    fn toggle_clear_bit_sets_only_that_bit() {
        assert_eq!(toggle_flag(0b1001, 0b0100), 0b1101);
    }

    #[test]
    fn toggle_partial_multi_bit_flag_sets_all_of_it() {
        // Ten = 2 | 8; only 8 is set, so the whole pattern gets set.
        assert_eq!(toggle_flag(0b1000, 10), 0b1010);
        assert_eq!(toggle_flag(0b1010, 10), 0);
    }

    #[test]
    fn preview_of_zero_is_none_label() {
        assert_eq!(flags_preview(VARIANTS, 0, "<None>"), "<None>");
    }

    #[test]
    fn preview_lists_single_flags() {
        assert_eq!(flags_preview(VARIANTS, 1 | 2 | 8, "<None>"), "One,Two,Eight");
    }

    #[test]
    fn preview_appends_unnamed_bits() {
        assert_eq!(flags_preview(VARIANTS, 1 | 32, "<None>"), "One,0x20");
    }
}
