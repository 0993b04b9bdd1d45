//! Compiles the service protos with tonic-build.
//!
//! protox compiles the `.proto` sources to a descriptor set in pure Rust,
//! so no `protoc` binary is needed at build time.

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let file_descriptors =
        protox::compile(["proto/user.proto", "proto/product.proto"], ["proto"])?;

    tonic_build::configure()
        .build_client(true)
        .build_server(true)
        .compile_fds(file_descriptors)?;

    println!("cargo:rerun-if-changed=proto/");
    Ok(())
}
