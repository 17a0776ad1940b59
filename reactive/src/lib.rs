//! Reactive primitives for the Ripple UI kit.
//!
//! The kit's rendering model is cooperative and single-threaded: views
//! describe themselves against an environment, and backends read component
//! configurations through signals. This crate provides those signals:
//!
//! - [`Binding`] — a writable state cell with watcher notification
//! - [`Computed`] — a clonable, type-erased signal stored in configs
//! - [`Constant`] — a never-changing signal for plain values
//! - [`SignalExt`] — `map`/`zip`/`computed` combinators
//! - [`IntoSignal`]/[`IntoComputed`] — accept either values or signals at
//!   API boundaries, with [`impl_constant!`] wiring up plain value types

#![no_std]

extern crate alloc;

macro_rules! fmt_type_name {
    () => {
        fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
            f.write_str(core::any::type_name::<Self>())
        }
    };
}

mod binding;
mod computed;
mod ext;
pub mod signal;
pub mod watcher;

pub use binding::{Binding, BindingGuard, binding};
pub use computed::Computed;
pub use ext::{Map, SignalExt, Zip};
pub use signal::{Constant, IntoComputed, IntoSignal, Signal};
