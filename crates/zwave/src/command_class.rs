use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandClass {
    Basic = 0x20,
    ApplicationStatus = 0x22,
    SwitchBinary = 0x25,
    SwitchMultilevel = 0x26,
    SceneActivation = 0x2B,
    SensorBinary = 0x30,
    SensorMultilevel = 0x31,
    Meter = 0x32,
    SwitchColor = 0x33,
    ThermostatMode = 0x40,
    ThermostatSetpoint = 0x43,
    TransportService = 0x55,
    Crc16Encap = 0x56,
    AssociationGroupInfo = 0x59,
    DeviceResetLocally = 0x5A,
    CentralScene = 0x5B,
    ZwavePlusInfo = 0x5E,
    MultiChannel = 0x60,
    DoorLock = 0x62,
    UserCode = 0x63,
    Supervision = 0x6C,
    Configuration = 0x70,
    Notification = 0x71,
    ManufacturerSpecific = 0x72,
    Powerlevel = 0x73,
    FirmwareUpdateMd = 0x7A,
    Battery = 0x80,
    Clock = 0x81,
    Hail = 0x82,
    WakeUp = 0x84,
    Association = 0x85,
    Version = 0x86,
    Indicator = 0x87,
    MultiChannelAssociation = 0x8E,
    MultiCmd = 0x8F,
    Security = 0x98,
    Security2 = 0x9F,
}

impl Into<u8> for CommandClass {
    fn into(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for CommandClass {
    type Error = u8;

    fn try_from(x: u8) -> Result<Self, Self::Error> {
        use CommandClass::*;
        Ok(match x {
            x if x == Basic as u8 => Basic,
            x if x == ApplicationStatus as u8 => ApplicationStatus,
            x if x == SwitchBinary as u8 => SwitchBinary,
            x if x == SwitchMultilevel as u8 => SwitchMultilevel,
            x if x == SceneActivation as u8 => SceneActivation,
            x if x == SensorBinary as u8 => SensorBinary,
            x if x == SensorMultilevel as u8 => SensorMultilevel,
            x if x == Meter as u8 => Meter,
            x if x == SwitchColor as u8 => SwitchColor,
            x if x == ThermostatMode as u8 => ThermostatMode,
            x if x == ThermostatSetpoint as u8 => ThermostatSetpoint,
            x if x == TransportService as u8 => TransportService,
            x if x == Crc16Encap as u8 => Crc16Encap,
            x if x == AssociationGroupInfo as u8 => AssociationGroupInfo,
            x if x == DeviceResetLocally as u8 => DeviceResetLocally,
            x if x == CentralScene as u8 => CentralScene,
            x if x == ZwavePlusInfo as u8 => ZwavePlusInfo,
            x if x == MultiChannel as u8 => MultiChannel,
            x if x == DoorLock as u8 => DoorLock,
            x if x == UserCode as u8 => UserCode,
            x if x == Supervision as u8 => Supervision,
            x if x == Configuration as u8 => Configuration,
            x if x == Notification as u8 => Notification,
            x if x == ManufacturerSpecific as u8 => ManufacturerSpecific,
            x if x == Powerlevel as u8 => Powerlevel,
            x if x == FirmwareUpdateMd as u8 => FirmwareUpdateMd,
            x if x == Battery as u8 => Battery,
            x if x == Clock as u8 => Clock,
            x if x == Hail as u8 => Hail,
            x if x == WakeUp as u8 => WakeUp,
            x if x == Association as u8 => Association,
            x if x == Version as u8 => Version,
            x if x == Indicator as u8 => Indicator,
            x if x == MultiChannelAssociation as u8 => MultiChannelAssociation,
            x if x == MultiCmd as u8 => MultiCmd,
            x if x == Security as u8 => Security,
            x if x == Security2 as u8 => Security2,
            _ => return Err(x),
        })
    }
}

impl Display for CommandClass {
    fn fmt(
        &self,
        f: &mut Formatter,
    ) -> std::fmt::Result {
        write!(f, "{:02X}", *self as u8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_class() {
        assert_eq!(Ok(CommandClass::SwitchBinary), CommandClass::try_from(0x25));
        let id: u8 = CommandClass::SwitchBinary.into();
        assert_eq!(0x25, id);
    }

    #[test]
    fn test_unknown_class() {
        assert_eq!(Err(0x21), CommandClass::try_from(0x21));
    }
}
