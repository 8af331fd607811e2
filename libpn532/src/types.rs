// libpn532-rs/libpn532/src/types.rs

use crate::Error;
use crate::constants::{MIFARE_BLOCK_SIZE, MIFARE_FACTORY_KEY, MIFARE_KEY_SIZE};
use std::convert::TryFrom;
use std::fmt;

/// Card UID - Newtype Pattern (4 or 7 bytes)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Uid(Vec<u8>);

impl Uid {
    /// ISO/IEC 14443 UID sizes (single, double)
    pub const VALID_LENGTHS: [usize; 2] = [4, 7];

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// 4-byte UIDs identify MIFARE Classic cards.
    pub fn is_mifare_classic(&self) -> bool {
        self.0.len() == 4
    }

    /// Numeric card id of a 4-byte UID (big-endian). None for longer UIDs.
    pub fn to_u32(&self) -> Option<u32> {
        let bytes: [u8; 4] = self.0.as_slice().try_into().ok()?;
        Some(u32::from_be_bytes(bytes))
    }

    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex(self.as_bytes())
    }
}

impl TryFrom<&[u8]> for Uid {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let actual = bytes.len();
        if !Self::VALID_LENGTHS.contains(&actual) {
            // nearest accepted size at or above `actual`, else the largest
            let expected = Self::VALID_LENGTHS
                .iter()
                .copied()
                .find(|&n| n >= actual)
                .unwrap_or(7);
            return Err(Error::InvalidLength { expected, actual });
        }
        Ok(Self(bytes.to_vec()))
    }
}

impl AsRef<[u8]> for Uid {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// MIFARE Classic key (6 バイト)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MifareKey([u8; MIFARE_KEY_SIZE]);

impl MifareKey {
    pub const FACTORY_DEFAULT: Self = Self(MIFARE_FACTORY_KEY);

    pub const fn from_bytes(bytes: [u8; MIFARE_KEY_SIZE]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; MIFARE_KEY_SIZE] {
        &self.0
    }
}

impl Default for MifareKey {
    fn default() -> Self {
        Self::FACTORY_DEFAULT
    }
}

impl From<[u8; MIFARE_KEY_SIZE]> for MifareKey {
    fn from(bytes: [u8; MIFARE_KEY_SIZE]) -> Self {
        Self(bytes)
    }
}

impl TryFrom<&[u8]> for MifareKey {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let arr: [u8; MIFARE_KEY_SIZE] = bytes.try_into().map_err(|_| Error::InvalidLength {
            expected: MIFARE_KEY_SIZE,
            actual: bytes.len(),
        })?;
        Ok(Self(arr))
    }
}

/// Key slot used for MIFARE Classic authentication
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum KeyType {
    #[display(fmt = "key A")]
    A,
    #[display(fmt = "key B")]
    B,
}

impl KeyType {
    /// Authentication sub-command carried in InDataExchange
    pub fn auth_command(self) -> u8 {
        match self {
            KeyType::A => crate::constants::MIFARE_CMD_AUTH_A,
            KeyType::B => crate::constants::MIFARE_CMD_AUTH_B,
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            KeyType::A => 0,
            KeyType::B => 1,
        }
    }
}

/// Modulation / baud rate of the targets to discover (InListPassiveTarget BrTy)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, derive_more::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CardType {
    /// ISO/IEC 14443 Type A, 106 kbps (MIFARE)
    #[default]
    #[display(fmt = "ISO14443A 106kbps")]
    TypeA,
    /// FeliCa 212 kbps
    #[display(fmt = "FeliCa 212kbps")]
    FeliCa212,
    /// FeliCa 424 kbps
    #[display(fmt = "FeliCa 424kbps")]
    FeliCa424,
    /// ISO/IEC 14443-3B, 106 kbps
    #[display(fmt = "ISO14443B 106kbps")]
    TypeB,
    /// Innovision Jewel, 106 kbps
    #[display(fmt = "Jewel 106kbps")]
    Jewel,
}

impl CardType {
    pub fn brty(self) -> u8 {
        match self {
            CardType::TypeA => 0x00,
            CardType::FeliCa212 => 0x01,
            CardType::FeliCa424 => 0x02,
            CardType::TypeB => 0x03,
            CardType::Jewel => 0x04,
        }
    }
}

/// BlockData (16 バイト)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BlockData([u8; MIFARE_BLOCK_SIZE]);

impl BlockData {
    pub fn from_bytes(bytes: [u8; MIFARE_BLOCK_SIZE]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; MIFARE_BLOCK_SIZE] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex_spaced(self.as_bytes())
    }

    pub fn to_ascii_safe(&self) -> String {
        self.0
            .iter()
            .map(|&b| {
                if b.is_ascii_graphic() || b == b' ' {
                    b as char
                } else {
                    '.'
                }
            })
            .collect()
    }
}

impl TryFrom<&[u8]> for BlockData {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let arr: [u8; MIFARE_BLOCK_SIZE] =
            bytes.try_into().map_err(|_| Error::InvalidLength {
                expected: MIFARE_BLOCK_SIZE,
                actual: bytes.len(),
            })?;
        Ok(Self(arr))
    }
}

/// Version information of the embedded firmware
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FirmwareVersion {
    /// IC identifier, 0x32 for the PN532
    pub ic: u8,
    pub ver: u8,
    pub rev: u8,
    /// Bitmap of supported card families
    pub support: u8,
}

impl FirmwareVersion {
    pub fn supports_iso14443a(&self) -> bool {
        self.support & 0x01 != 0
    }

    pub fn supports_iso14443b(&self) -> bool {
        self.support & 0x02 != 0
    }

    pub fn supports_iso18092(&self) -> bool {
        self.support & 0x04 != 0
    }
}

impl fmt::Display for FirmwareVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PN5{:02x} firmware {}.{}, support {:#04x}",
            self.ic, self.ver, self.rev, self.support
        )
    }
}

/// A target found by InListPassiveTarget (106 kbps Type A layout)
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PassiveTarget {
    /// Logical target number assigned by the chip
    pub target_number: u8,
    /// SENS_RES (ATQA)
    pub sens_res: u16,
    /// SEL_RES (SAK)
    pub sel_res: u8,
    pub uid: Uid,
}
