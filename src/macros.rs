#[cfg(feature = "log")]
macro_rules! trace {
    ($($arg:tt)+) => {
        log::trace!(target: "fastnumbers", $($arg)+)
    };
}

#[cfg(not(feature = "log"))]
macro_rules! trace {
    ($($arg:tt)+) => {};
}

macro_rules! impl_into_input {
    ($variant:ident, $target:ty, $($ty:ty),+) => {
        $(
            impl<'i> IntoInput<'i> for $ty {
                #[inline(always)]
                fn into_input(self) -> Input<'i> {
                    Input::$variant(<$target>::from(self))
                }
            }
        )+
    };
}
