//! Encrypts and decrypts one block with the FIPS-197 Appendix C.1 vector.

use aes_core::{Aes128, Aes128Key};

fn main() {
    let key = Aes128Key::from([
        0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0a, 0x0b, 0x0c, 0x0d, 0x0e,
        0x0f,
    ]);
    let cipher = Aes128::new(&key);

    let plaintext = *b"\x00\x11\x22\x33\x44\x55\x66\x77\x88\x99\xaa\xbb\xcc\xdd\xee\xff";
    let ciphertext = cipher.encrypt_block(&plaintext);
    assert_eq!(
        ciphertext,
        [
            0x69, 0xc4, 0xe0, 0xd8, 0x6a, 0x7b, 0x04, 0x30, 0xd8, 0xcd, 0xb7, 0x80, 0x70, 0xb4,
            0xc5, 0x5a
        ]
    );
    assert_eq!(cipher.decrypt_block(&ciphertext), plaintext);

    println!("example succeeded; ciphertext matches FIPS-197 C.1");
}
