/// Possible simplification steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Step {
    /// `2+3 = 5`
    /// `a+2+b+3 = 5+a+b`
    /// `sin(0) = 0`
    FoldConstants,

    /// `0+a = a`
    /// `a+0 = a`
    AddZero,

    /// `a-0 = a`
    SubtractZero,

    /// `0*a = 0`
    /// `a*0 = 0`
    MultiplyZero,

    /// `1*a = a`
    /// `a*1 = a`
    MultiplyOne,

    /// `a^0 = 1`
    PowerZero,

    /// `0^a = 0`
    PowerZeroLeft,

    /// `a^1 = a`
    PowerOne,
}
