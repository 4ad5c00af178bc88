//! Cassandra consistency levels

vocabulary! {
    /// Read/write consistency level
    pub enum Consistency {
        Any = 1 => "any",
        One = 2 => "one",
        Two = 3 => "two",
        Three = 4 => "three",
        Quorum = 5 => "quorum",
        All = 6 => "all",
        LocalQuorum = 7 => "localquorum",
        EachQuorum = 8 => "eachquorum",
        LocalOne = 9 => "localone",
    }
}

vocabulary! {
    /// Consistency level for the serial phase of lightweight transactions
    pub enum SerialConsistency {
        Serial = 1 => "serial",
        LocalSerial = 2 => "localserial",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_consistency_parse() {
        assert_eq!(Consistency::parse("QUORUM"), Consistency::Quorum);
        assert_eq!(Consistency::parse("LocalQuorum"), Consistency::LocalQuorum);
        assert_eq!(Consistency::parse("local_quorum"), Consistency::Unknown);
        assert_eq!(Consistency::parse(""), Consistency::Unknown);
    }

    #[test]
    fn test_serial_consistency() {
        assert_eq!(SerialConsistency::parse("LOCALSERIAL"), SerialConsistency::LocalSerial);
        assert_eq!(SerialConsistency::Serial.to_string(), "serial");
        assert_eq!(SerialConsistency::from(7).to_string(), "unknown");
    }
}
