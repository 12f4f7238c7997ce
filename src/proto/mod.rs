// @generated
// Vendored protobuf/tonic code for proto/vdb/v1/search_engine.proto.
// Note: the prost file include!()s the tonic client automatically.

pub mod vdb {
    pub mod v1 {
        include!("vdb.v1.rs");
        // vdb.v1.tonic.rs is auto-included by vdb.v1.rs
    }
}
