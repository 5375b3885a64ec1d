use std::fmt::{Display, Formatter};
use std::net::ToSocketAddrs;

/// Connection details for one driver joining the crew server.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Credentials {
    pub ip: String,
    pub port: u16,
    pub username: String,
    pub driver_id: i32,
    /// Index of this driver in the car's driver list
    pub driver_nb: i32,
}

impl Credentials {
    pub fn new<S: Into<String>, U: Into<String>>(
        ip: S,
        port: u16,
        username: U,
        driver_id: i32,
        driver_nb: i32,
    ) -> Self {
        Self {
            ip: ip.into(),
            port,
            username: username.into(),
            driver_id,
            driver_nb,
        }
    }

    pub fn server_addr(&self) -> impl ToSocketAddrs + '_ {
        (self.ip.as_str(), self.port)
    }
}

impl Display for Credentials {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} (driver {}, #{}) @ {}:{}",
            self.username, self.driver_id, self.driver_nb, self.ip, self.port
        )
    }
}
