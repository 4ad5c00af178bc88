//! Server protocol modes

vocabulary! {
    /// Protocol served by a server node
    pub enum ServerMode {
        Rest = 1 => "rest",
        Grpc = 2 => "grpc",
    }
}
