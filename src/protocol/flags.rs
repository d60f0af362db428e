use bitflags::bitflags;

bitflags! {
    /// The flags a node sets on a reply.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct ResponseFlags: i32 {
        /// The cursor named by a get-more no longer exists on the server.
        const CURSOR_NOT_FOUND  = 0b00000001;
        /// The query failed; the first reply document describes the error.
        const QUERY_FAILURE     = 0b00000010;
        /// The config server on a shard reported stale data.
        const SHARD_CONFIG_STALE = 0b00000100;
        /// The server supports the await-data query flag.
        const AWAIT_CAPABLE     = 0b00001000;
    }
}

bitflags! {
    /// The flags a client may set on a query.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct QueryFlags: i32 {
        /// Leave the cursor open once the last result has been retrieved.
        const TAILABLE_CURSOR   = 0b00000010;
        /// Allow the query to run against a secondary.
        const SLAVE_OK          = 0b00000100;
        /// Internal replication flag.
        const OPLOG_REPLAY      = 0b00001000;
        /// Prevent the server from timing out idle cursors.
        const NO_CURSOR_TIMEOUT = 0b00010000;
        /// Block at the end of a tailable cursor rather than returning no data.
        const AWAIT_DATA        = 0b00100000;
        /// Stream all results without further get-more requests.
        const EXHAUST           = 0b01000000;
        /// Return partial results if some shards are down.
        const PARTIAL           = 0b10000000;
    }
}
