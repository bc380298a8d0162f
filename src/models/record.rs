/// One VPN/WebVPN authentication-rejection event parsed from the syslog
///
/// The IP fields stay plain strings: the matcher only checks the
/// dotted-quad shape, not octet ranges, and the report must carry the
/// address exactly as the device logged it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailureRecord {
    /// Syslog timestamp, e.g. "Apr 12 03:14:07"
    pub date: String,
    /// Address of the ASA that emitted the line
    pub device_ip: String,
    /// Address of the AAA/RADIUS server that rejected the login
    pub radius_ip: String,
    /// Username as logged; may contain spaces or punctuation
    pub user: String,
    /// Address the client attempted the login from
    pub user_ip: String,
}
