//! Transport network types

vocabulary! {
    /// Network passed to dialers and listeners
    pub enum NetworkType {
        Tcp = 1 => "tcp",
        Tcp4 = 2 => "tcp4",
        Tcp6 = 3 => "tcp6",
        Udp = 4 => "udp",
        Udp4 = 5 => "udp4",
        Udp6 = 6 => "udp6",
        Unix = 7 => "unix",
        UnixGram = 8 => "unixgram",
        UnixPacket = 9 => "unixpacket",
    }
}

impl NetworkType {
    /// Unix domain socket networks address a path rather than host and port
    pub fn is_unix(&self) -> bool {
        matches!(self, NetworkType::Unix | NetworkType::UnixGram | NetworkType::UnixPacket)
    }
}
