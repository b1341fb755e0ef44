//! Macros for declaring cross-kind derivations.

/// Declares the cross-kind operator catalog.
///
/// Each line `A * B => C` or `A / B => C` expands to:
///
/// - `impl Mul<Measure<B>> for Measure<A>` (or `Div`) with `Output = Measure<C>`, multiplying (dividing) the
///   standard-unit amounts;
/// - a `const` assertion that `dim(A) * dim(B) == dim(C)` (or `/`), so an inconsistent rule fails to compile;
/// - one [`Derivation`](crate::Derivation) entry in the generated `pub static CATALOG` slice.
///
/// Same-kind division (`A / A`) is already provided generically and must not be listed.
#[macro_export]
macro_rules! derivations {
    ($($lhs:ident $op:tt $rhs:ident => $out:ident),+ $(,)?) => {
        $(
            $crate::derivations!(@impl $lhs $op $rhs => $out);
        )+

        /// Every cross-kind rule with a typed operator, in declaration order.
        pub static CATALOG: &[$crate::Derivation] = &[
            $(
                $crate::derivations!(@rule $lhs $op $rhs => $out),
            )+
        ];
    };

    (@impl $lhs:ident * $rhs:ident => $out:ident) => {
        impl ::core::ops::Mul<$crate::Measure<$rhs>> for $crate::Measure<$lhs> {
            type Output = $crate::Measure<$out>;
            #[inline]
            fn mul(self, rhs: $crate::Measure<$rhs>) -> Self::Output {
                $crate::Measure::new(self.amount() * rhs.amount())
            }
        }

        const _: () = assert!(
            <$lhs as $crate::Kind>::KIND
                .dimension()
                .mul(<$rhs as $crate::Kind>::KIND.dimension())
                .equals(<$out as $crate::Kind>::KIND.dimension()),
            concat!("inconsistent derivation: ", stringify!($lhs * $rhs => $out)),
        );
    };

    (@impl $lhs:ident / $rhs:ident => $out:ident) => {
        impl ::core::ops::Div<$crate::Measure<$rhs>> for $crate::Measure<$lhs> {
            type Output = $crate::Measure<$out>;
            #[inline]
            fn div(self, rhs: $crate::Measure<$rhs>) -> Self::Output {
                $crate::Measure::new(self.amount() / rhs.amount())
            }
        }

        const _: () = assert!(
            <$lhs as $crate::Kind>::KIND
                .dimension()
                .div(<$rhs as $crate::Kind>::KIND.dimension())
                .equals(<$out as $crate::Kind>::KIND.dimension()),
            concat!("inconsistent derivation: ", stringify!($lhs / $rhs => $out)),
        );
    };

    (@rule $lhs:ident * $rhs:ident => $out:ident) => {
        $crate::Derivation::new(
            <$lhs as $crate::Kind>::KIND,
            $crate::Operation::Multiply,
            <$rhs as $crate::Kind>::KIND,
            <$out as $crate::Kind>::KIND,
        )
    };

    (@rule $lhs:ident / $rhs:ident => $out:ident) => {
        $crate::Derivation::new(
            <$lhs as $crate::Kind>::KIND,
            $crate::Operation::Divide,
            <$rhs as $crate::Kind>::KIND,
            <$out as $crate::Kind>::KIND,
        )
    };
}

/// Declares `pub static` standard and scaled units of one kind, plus a `pub static` slice listing them.
///
/// ```text
/// unit_table! {
///     LENGTH_UNITS for LENGTH;
///     /// Metre.
///     METER = standard "m";
///     /// Kilometre.
///     KILOMETER = prefix "km" Kilo;
///     /// Foot.
///     FOOT = scale "ft" NamedFactor::Foot.factor();
/// }
/// ```
#[macro_export]
macro_rules! unit_table {
    (
        $list:ident for $kind:ident;
        $(
            $(#[$meta:meta])*
            $name:ident = $how:ident $symbol:literal $($arg:expr),*
        );+ $(;)?
    ) => {
        $(
            $(#[$meta])*
            pub static $name: $crate::UnitDef = $crate::unit_table!(@def $kind, $how, $symbol $(, $arg)*);
        )+

        /// Every unit declared in this module, standard unit first.
        pub static $list: &[&$crate::UnitDef] = &[$(&$name),+];
    };

    (@def $kind:ident, standard, $symbol:literal) => {
        $crate::UnitDef::standard(&$kind, $symbol)
    };
    (@def $kind:ident, prefix, $symbol:literal, $prefix:expr) => {
        $crate::UnitDef::prefixed(&$kind, $symbol, $prefix)
    };
    (@def $kind:ident, scale, $symbol:literal, $scale:expr) => {
        $crate::UnitDef::scaled(&$kind, $symbol, $scale)
    };
    (@def $kind:ident, affine, $symbol:literal, $scale:expr, $offset:expr) => {
        $crate::UnitDef::affine(&$kind, $symbol, $scale, $offset)
    };
}
