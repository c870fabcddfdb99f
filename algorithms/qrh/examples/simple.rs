//! QRH Basic Example
//!
//! Minimal usage: `let hash = qrh::hash(&data);`

#![allow(clippy::pedantic, clippy::nursery)]

fn main() {
    let data = b"Hello, World!";
    let hash = qrh::hash(data);

    println!("Data: {:?}", String::from_utf8_lossy(data));
    println!("Hash: {}", hex::encode(hash));

    let tag = qrh::hmac(b"secret key", data);
    println!("HMAC: {}", hex::encode(tag));
}
