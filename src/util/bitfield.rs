// SPDX-License-Identifier: Unlicense

//! In-memory copies of shim register values.
//!
//! Register values are composed here from named fields and then written to
//! the shim in one access, so no intermediate value ever reaches hardware.

pub use tock_registers::{register_bitfields, UIntLike};

use tock_registers::{
    fields::{Field, FieldValue},
    RegisterLongName,
};

use core::marker::PhantomData;

/// A in-memory bit struct that fits into integer.
#[derive(Copy, Clone)]
#[repr(transparent)]
pub struct Bitfield<T: UIntLike, R: RegisterLongName = ()> {
    value: T,
    associated_register: PhantomData<R>,
}

impl<T: UIntLike, R: RegisterLongName> Bitfield<T, R> {
    /// New bitfield with given value.
    pub const fn new(value: T) -> Self {
        Self {
            value,
            associated_register: PhantomData,
        }
    }

    /// Retrieve the aggregate value.
    #[inline]
    pub fn get(&self) -> T {
        self.value
    }

    /// Read a field.
    #[inline]
    pub fn read(&self, field: Field<T, R>) -> T {
        (self.get() & (field.mask << field.shift)) >> field.shift
    }

    /// Change a set of field values, preserving the other bits.
    #[inline]
    pub fn modify(&mut self, field: FieldValue<T, R>) {
        self.value = field.modify(self.get());
    }

    /// Determine if a specific flag is set.
    #[inline]
    pub fn is_set(&self, field: Field<T, R>) -> bool {
        self.read(field) != T::zero()
    }
}

impl<T: UIntLike, R: RegisterLongName> From<FieldValue<T, R>> for Bitfield<T, R> {
    fn from(field: FieldValue<T, R>) -> Self {
        Self::new(field.value)
    }
}
