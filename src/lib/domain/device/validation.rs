use thiserror::Error;

const SERIAL_NUMBER_MIN: u64 = 10_000_000;
const SERIAL_NUMBER_MAX: u64 = 99_999_999;

const FIRMWARE_VERSION_MIN: i64 = 1;
const FIRMWARE_VERSION_MAX: i64 = 100;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("serial number {0} must be exactly 8 digits")]
pub struct InvalidSerialNumberError(pub i64);

#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("firmware version {0} must be between 1 and 100")]
pub struct InvalidFirmwareVersionError(pub i64);

/// Checks that `sno` has exactly 8 decimal digits.
///
/// Digits are counted over the absolute value, so a leading minus sign is not a digit and
/// `-12345678` passes.
pub fn validate_serial_number(sno: i64) -> Result<(), InvalidSerialNumberError> {
    if (SERIAL_NUMBER_MIN..=SERIAL_NUMBER_MAX).contains(&sno.unsigned_abs()) {
        Ok(())
    } else {
        Err(InvalidSerialNumberError(sno))
    }
}

/// Checks that `fv` lies in `1..=100`.
pub fn validate_firmware_version(fv: i64) -> Result<(), InvalidFirmwareVersionError> {
    if (FIRMWARE_VERSION_MIN..=FIRMWARE_VERSION_MAX).contains(&fv) {
        Ok(())
    } else {
        Err(InvalidFirmwareVersionError(fv))
    }
}

#[cfg(test)]
mod serial_number_tests {
    use super::*;

    #[test]
    fn test_eight_digits_success() {
        for sno in [10_000_000, 12_345_678, 99_999_999] {
            assert_eq!(validate_serial_number(sno), Ok(()));
        }
    }

    #[test]
    fn test_negative_eight_digits_success() {
        assert_eq!(validate_serial_number(-12_345_678), Ok(()));
        assert_eq!(validate_serial_number(-10_000_000), Ok(()));
    }

    #[test]
    fn test_wrong_digit_count_is_invalid() {
        for sno in [
            0,
            7,
            1234,
            9_999_999,
            100_000_000,
            -1_234_567,
            -123_456_789,
            i64::MAX,
            i64::MIN,
        ] {
            assert_eq!(
                validate_serial_number(sno),
                Err(InvalidSerialNumberError(sno))
            );
        }
    }
}
