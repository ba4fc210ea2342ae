use std::slice;

use crate::topology::Device;

/// Committed devices, in the order they were finished.
#[derive(Debug, Default, Clone)]
pub struct DeviceGraph {
    devices: Vec<Device>,
}

impl DeviceGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a finished device. Blank records are dropped and `false` is returned.
    pub fn commit(&mut self, device: Device) -> bool {
        if device.is_blank() {
            return false;
        }
        self.devices.push(device);
        true
    }

    pub fn devices(&self) -> &[Device] {
        &self.devices
    }

    pub fn iter(&self) -> slice::Iter<'_, Device> {
        self.devices.iter()
    }

    pub fn len(&self) -> usize {
        self.devices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }
}

impl<'a> IntoIterator for &'a DeviceGraph {
    type Item = &'a Device;
    type IntoIter = slice::Iter<'a, Device>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
