//! Quantization and Floyd–Steinberg error weights.
//!
//! All arithmetic is integer. Every weighted share of an error is computed
//! with [`floor_div()`], i.e. rounded toward negative infinity, so that
//! negative errors produce the exact same shares as an arithmetic right
//! shift by four would.
//!
//! The kernel distributes error to the four unprocessed neighbours:
//!
//! ```text
//!        X   7
//!    3   5   1
//! ```

/// Brightness at or above which a pixel becomes [`WHITE`].
pub const THRESHOLD: i16 = 128;

/// Output value of a dark pixel.
pub const BLACK: u8 = 0;

/// Output value of a bright pixel.
pub const WHITE: u8 = 255;

/// Denominator shared by all four weights.
const DENOMINATOR: i16 = 16;

/// Divide `value` by `divisor`, rounding toward negative infinity.
///
/// Rust's `/` truncates toward zero, which would give `-875 / 16 == -54`.
/// Dithering noise patterns depend on the rounding direction, so every
/// error share goes through this instead.
///
/// `divisor` must be positive.
///
/// ## Examples
///
/// ```
/// # use fsdither::floor_div;
/// assert_eq!(floor_div(-875, 16), -55);
/// assert_eq!(floor_div(875, 16), 54);
/// assert_eq!(floor_div(-16, 16), -1);
/// ```
#[inline(always)]
pub fn floor_div(value: i16, divisor: i16) -> i16 {
    debug_assert!(divisor > 0, "divisor must be positive");
    // For a positive divisor the Euclidean quotient is the floored one.
    value.div_euclid(divisor)
}

/// Map an accumulated brightness to [`BLACK`] or [`WHITE`].
///
/// Values may lie outside `0..=255` once error has been added; anything
/// below [`THRESHOLD`] is black, everything else white.
#[inline(always)]
pub fn quantize(value: i16) -> u8 {
    if value < THRESHOLD { BLACK } else { WHITE }
}

/// The four shares a single quantization error is split into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Diffusion {
    /// 7/16, to the next pixel in the same row.
    pub right: i16,
    /// 3/16, to the pixel below and to the left.
    pub down_left: i16,
    /// 5/16, to the pixel directly below.
    pub down: i16,
    /// 1/16, to the pixel below and to the right.
    pub down_right: i16,
}

impl Diffusion {
    /// Split `error` using the Floyd–Steinberg weights.
    ///
    /// Each share is floored on its own, so the sum of the shares is at
    /// most three less than `error` (see [`Diffusion::total()`]).
    ///
    /// ## Examples
    ///
    /// ```
    /// # use fsdither::Diffusion;
    /// let shares = Diffusion::split(-125);
    ///
    /// assert_eq!(shares.right, -55);
    /// assert_eq!(shares.down_left, -24);
    /// assert_eq!(shares.down, -40);
    /// assert_eq!(shares.down_right, -8);
    /// ```
    #[inline(always)]
    pub fn split(error: i16) -> Self {
        Self {
            right: floor_div(error * 7, DENOMINATOR),
            down_left: floor_div(error * 3, DENOMINATOR),
            down: floor_div(error * 5, DENOMINATOR),
            down_right: floor_div(error, DENOMINATOR),
        }
    }

    /// Sum of all four shares.
    #[inline]
    pub fn total(&self) -> i16 {
        self.right + self.down_left + self.down + self.down_right
    }
}

/// Error carried along a single row scan.
///
/// `right` is the share waiting for the next column of the current row.
/// `down_left_prev` is the share destined for the column of the row below
/// that is finalized next, `down_left_prevprev` the one after that.
///
/// All three start at zero for every row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) struct Carry {
    pub(crate) right: i16,
    pub(crate) down_left_prev: i16,
    pub(crate) down_left_prevprev: i16,
}

impl Carry {
    /// Take the next-row value for the column behind the current one and
    /// rotate the carries by one column.
    ///
    /// The returned share must be added to the source brightness of that
    /// column in the row below.
    #[inline(always)]
    pub(crate) fn advance(&mut self, shares: &Diffusion) -> i16 {
        let behind = self.down_left_prev + shares.down_left;

        self.right = shares.right;
        self.down_left_prev = self.down_left_prevprev + shares.down;
        self.down_left_prevprev = shares.down_right;

        behind
    }

    /// Share left for the last column of the row below once the scan has
    /// reached the end of the row.
    ///
    /// The down-right share of the last pixel has no target and is dropped.
    #[inline(always)]
    pub(crate) fn finish(&self) -> i16 {
        self.down_left_prev
    }
}
