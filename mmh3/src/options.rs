use num_derive::{FromPrimitive, ToPrimitive};
use num_traits::{FromPrimitive, ToPrimitive};

use crate::error::{Error, Result};

/// Word size the 128-bit algorithm is optimized for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromPrimitive, ToPrimitive)]
pub enum Arch {
    X86 = 0,
    X64 = 1,
}

#[derive(Debug, Clone)]
pub struct HashOptions {
    pub seed: u32,
    pub arch: Arch,
    /// `None` keeps the default of the function it is passed to.
    pub signed: Option<bool>,
    pub chunk_size: usize,
}

impl Default for HashOptions {
    fn default() -> Self {
        Self {
            seed: 0,
            arch: Arch::X64,
            signed: None,
            chunk_size: 64 * 1024,
        }
    }
}

impl HashOptions {
    /// Builds options from raw integer arguments, checking that each one is
    /// representable: the seed as a `u32`, the flags as 0 or 1.
    pub fn from_flags(seed: u64, x64arch: u8, signed: u8) -> Result<Self> {
        let seed = seed.to_u32().ok_or_else(|| Error::SeedOutOfRange {
            seed: seed.to_string(),
            bits: 32,
        })?;
        let arch = Arch::from_u8(x64arch).ok_or(Error::InvalidFlag {
            name: "x64arch",
            value: x64arch.into(),
        })?;
        let signed = match signed {
            0 => false,
            1 => true,
            value => {
                return Err(Error::InvalidFlag {
                    name: "signed",
                    value: value.into(),
                })
            }
        };
        Ok(Self {
            seed,
            arch,
            signed: Some(signed),
            ..Default::default()
        })
    }

    pub(crate) fn signed_or(&self, default: bool) -> bool {
        self.signed.unwrap_or(default)
    }
}
