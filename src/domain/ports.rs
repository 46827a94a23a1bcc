use std::fmt::{Debug, Display};

/// 可安全相加、不會靜默溢位的數值型別
pub trait Summable: Copy + Debug + Display + Send + Sync {
    /// 結果無法以 `Self` 表示時回傳 `None`
    fn checked_sum(self, other: Self) -> Option<Self>;
}

macro_rules! impl_summable_int {
    ($($t:ty),*) => {
        $(
            impl Summable for $t {
                fn checked_sum(self, other: Self) -> Option<Self> {
                    self.checked_add(other)
                }
            }
        )*
    };
}

macro_rules! impl_summable_float {
    ($($t:ty),*) => {
        $(
            impl Summable for $t {
                fn checked_sum(self, other: Self) -> Option<Self> {
                    Some(self + other)
                }
            }
        )*
    };
}

impl_summable_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_summable_float!(f32, f64);
