pub const STICK_MIN: u8 = 0;
pub const STICK_CENTER: u8 = 128;
pub const STICK_MAX: u8 = 255;
pub const REPORT_LEN: usize = 8;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct Buttons {
    bits: u16,
}

impl Buttons {
    pub const Y: u16 = 1 << 0;
    pub const B: u16 = 1 << 1;
    pub const A: u16 = 1 << 2;
    pub const X: u16 = 1 << 3;
    pub const L: u16 = 1 << 4;
    pub const R: u16 = 1 << 5;
    pub const ZL: u16 = 1 << 6;
    pub const ZR: u16 = 1 << 7;
    pub const MINUS: u16 = 1 << 8;
    pub const PLUS: u16 = 1 << 9;
    pub const LCLICK: u16 = 1 << 10;
    pub const RCLICK: u16 = 1 << 11;
    pub const HOME: u16 = 1 << 12;
    pub const CAPTURE: u16 = 1 << 13;
    const SUPPORTED_MASK: u16 = (1 << 14) - 1;

    pub const fn none() -> Self {
        Self { bits: 0 }
    }

    pub const fn from_bits(bits: u16) -> Self {
        Self {
            bits: bits & Self::SUPPORTED_MASK,
        }
    }

    pub const fn bits(self) -> u16 {
        self.bits
    }

    pub const fn contains(self, mask: u16) -> bool {
        mask != 0 && (self.bits & mask) == mask
    }

    pub fn press(&mut self, mask: u16) {
        self.bits |= mask & Self::SUPPORTED_MASK;
    }

    pub const fn is_empty(self) -> bool {
        self.bits == 0
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Hat {
    Up,
    UpRight,
    Right,
    DownRight,
    Down,
    DownLeft,
    Left,
    UpLeft,
    #[default]
    Center,
}

impl Hat {
    pub const fn as_u8(self) -> u8 {
        match self {
            Self::Up => 0x00,
            Self::UpRight => 0x01,
            Self::Right => 0x02,
            Self::DownRight => 0x03,
            Self::Down => 0x04,
            Self::DownLeft => 0x05,
            Self::Left => 0x06,
            Self::UpLeft => 0x07,
            Self::Center => 0x08,
        }
    }

    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            0x00 => Some(Self::Up),
            0x01 => Some(Self::UpRight),
            0x02 => Some(Self::Right),
            0x03 => Some(Self::DownRight),
            0x04 => Some(Self::Down),
            0x05 => Some(Self::DownLeft),
            0x06 => Some(Self::Left),
            0x07 => Some(Self::UpLeft),
            0x08 => Some(Self::Center),
            _ => None,
        }
    }
}

/// One poll's worth of pad state, in the field order of the Pokken pad
/// input report.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct HidReport {
    pub buttons: Buttons,
    pub hat: Hat,
    pub lx: u8,
    pub ly: u8,
    pub rx: u8,
    pub ry: u8,
}

impl Default for HidReport {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

impl HidReport {
    pub const NEUTRAL: Self = Self {
        buttons: Buttons::none(),
        hat: Hat::Center,
        lx: STICK_CENTER,
        ly: STICK_CENTER,
        rx: STICK_CENTER,
        ry: STICK_CENTER,
    };

    pub fn reset(&mut self) {
        *self = Self::NEUTRAL;
    }

    pub fn is_neutral(&self) -> bool {
        *self == Self::NEUTRAL
    }

    /// Wire bytes: buttons (little endian), hat, LX, LY, RX, RY, vendor.
    pub fn to_bytes(&self) -> [u8; REPORT_LEN] {
        let [buttons_lo, buttons_hi] = self.buttons.bits().to_le_bytes();
        [
            buttons_lo,
            buttons_hi,
            self.hat.as_u8(),
            self.lx,
            self.ly,
            self.rx,
            self.ry,
            0,
        ]
    }

    pub fn from_bytes(bytes: &[u8; REPORT_LEN]) -> Option<Self> {
        Some(Self {
            buttons: Buttons::from_bits(u16::from_le_bytes([bytes[0], bytes[1]])),
            hat: Hat::from_u8(bytes[2])?,
            lx: bytes[3],
            ly: bytes[4],
            rx: bytes[5],
            ry: bytes[6],
        })
    }
}
