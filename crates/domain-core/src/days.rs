//! 声明数值校验
//!
//! 宿主框架把数值以浮点传入，这里只接受非负整数，绝不截断。

use retention_errors::{AppError, AppResult};

/// 远端 API 接受的最大天数（32 位有符号整数）
pub const MAX_DAYS: u32 = i32::MAX as u32;

/// 把声明的数值转换为天数
pub fn days_from_number(value: f64) -> AppResult<u32> {
    if !value.is_finite() {
        return Err(AppError::validation(format!(
            "days must be a finite number, got {}",
            value
        )));
    }
    if value.fract() != 0.0 {
        return Err(AppError::validation(format!(
            "days must be a whole number, got {}",
            value
        )));
    }
    if value < 0.0 {
        return Err(AppError::validation(format!(
            "days must not be negative, got {}",
            value
        )));
    }
    if value > f64::from(MAX_DAYS) {
        return Err(AppError::validation(format!(
            "days must be at most {}, got {}",
            MAX_DAYS, value
        )));
    }

    Ok(value as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_numbers_convert() {
        assert_eq!(days_from_number(30.0).unwrap(), 30);
        assert_eq!(days_from_number(0.0).unwrap(), 0);
        assert_eq!(days_from_number(-0.0).unwrap(), 0);
        assert_eq!(days_from_number(f64::from(MAX_DAYS)).unwrap(), MAX_DAYS);
    }

    #[test]
    fn test_fraction_rejected_not_truncated() {
        let err = days_from_number(30.7).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_out_of_range_rejected() {
        for value in [-1.0, f64::from(MAX_DAYS) + 1.0, f64::NAN, f64::INFINITY] {
            assert!(days_from_number(value).is_err(), "{value} should be rejected");
        }
    }
}
