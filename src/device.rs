use crate::error::SegmentationError;
use std::fmt;
use std::str::FromStr;

/// What the user asked for. Resolved into a concrete [`Device`] once the
/// runtime reports how many accelerators it can drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeviceSelection {
    #[default]
    Auto,
    Cpu,
    Accelerator(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Device {
    Cpu,
    Accelerator(usize),
}

impl fmt::Display for Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Device::Cpu => write!(f, "cpu"),
            Device::Accelerator(index) => write!(f, "gpu:{}", index),
        }
    }
}

impl fmt::Display for DeviceSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeviceSelection::Auto => write!(f, "auto"),
            DeviceSelection::Cpu => write!(f, "cpu"),
            DeviceSelection::Accelerator(index) => write!(f, "gpu:{}", index),
        }
    }
}

impl FromStr for DeviceSelection {
    type Err = SegmentationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim().to_lowercase();
        let invalid = || SegmentationError::InvalidDevice(s.to_string());

        match value.as_str() {
            "auto" => Ok(DeviceSelection::Auto),
            "cpu" => Ok(DeviceSelection::Cpu),
            "gpu" | "cuda" => Ok(DeviceSelection::Accelerator(0)),
            _ => {
                let index = value
                    .strip_prefix("gpu:")
                    .or_else(|| value.strip_prefix("cuda:"))
                    .unwrap_or(&value);
                index
                    .parse::<usize>()
                    .map(DeviceSelection::Accelerator)
                    .map_err(|_| invalid())
            }
        }
    }
}

impl DeviceSelection {
    /// Never falls back to the CPU for an explicit accelerator request.
    pub fn resolve(self, accelerator_count: usize) -> Result<Device, SegmentationError> {
        match self {
            DeviceSelection::Cpu => Ok(Device::Cpu),
            DeviceSelection::Auto if accelerator_count > 0 => Ok(Device::Accelerator(0)),
            DeviceSelection::Auto => Ok(Device::Cpu),
            DeviceSelection::Accelerator(index) if index < accelerator_count => {
                Ok(Device::Accelerator(index))
            }
            DeviceSelection::Accelerator(index) => Err(SegmentationError::DeviceUnavailable {
                requested: index,
                available: accelerator_count,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_device_names() {
        assert_eq!("auto".parse::<DeviceSelection>().unwrap(), DeviceSelection::Auto);
        assert_eq!("CPU".parse::<DeviceSelection>().unwrap(), DeviceSelection::Cpu);
        assert_eq!(
            "gpu".parse::<DeviceSelection>().unwrap(),
            DeviceSelection::Accelerator(0)
        );
        assert_eq!(
            "gpu:2".parse::<DeviceSelection>().unwrap(),
            DeviceSelection::Accelerator(2)
        );
        assert_eq!(
            "1".parse::<DeviceSelection>().unwrap(),
            DeviceSelection::Accelerator(1)
        );
    }

    #[test]
    fn test_parse_invalid_device() {
        let err = "tpu:x".parse::<DeviceSelection>().unwrap_err();
        assert!(matches!(err, SegmentationError::InvalidDevice(name) if name == "tpu:x"));
    }

    #[test]
    fn test_auto_prefers_accelerator() {
        assert_eq!(DeviceSelection::Auto.resolve(2).unwrap(), Device::Accelerator(0));
        assert_eq!(DeviceSelection::Auto.resolve(0).unwrap(), Device::Cpu);
    }

    #[test]
    fn test_missing_accelerator_is_an_error() {
        let err = DeviceSelection::Accelerator(1).resolve(1).unwrap_err();
        assert!(matches!(
            err,
            SegmentationError::DeviceUnavailable {
                requested: 1,
                available: 1
            }
        ));
        assert_eq!(DeviceSelection::Accelerator(0).resolve(1).unwrap(), Device::Accelerator(0));
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        let selection = DeviceSelection::Accelerator(3);
        assert_eq!(selection.to_string().parse::<DeviceSelection>().unwrap(), selection);
    }
}
