// Demo driver
// Generates a toy key pair, reports how it came about, and walks one
// message through encrypt and decrypt

use anyhow::Result;

use textbook_rsa::{decrypt, encrypt, generate_key_pair};

const KEY_SIZE: u32 = 8;
const MESSAGE: &str = "ABCDEFGHIJabcdefghij";

fn main() -> Result<()> {
    let generation = generate_key_pair(KEY_SIZE)?;
    let pair = &generation.key_pair;

    println!("Key size: {} bits", KEY_SIZE);
    println!("Prime A (p): {}", generation.p);
    println!("Prime B (q): {}", generation.q);
    println!("(A-1) * (B-1) | (totient): {}", generation.totient);
    println!(
        "List of possible keys where 1 < key < totient and both are coprime has {} items",
        generation.candidate_count
    );
    println!(
        "Tried the following candidates to find one with an inverse mod the totient:"
    );
    for (i, candidate) in generation.tried_candidates.iter().enumerate() {
        println!("Candidate {}: {}", i + 1, candidate);
    }
    println!("Unique element of public key (e): {}", pair.e);
    println!("Unique element of private key (d): {}", pair.d);
    println!("Shared element of public and private keys, p * q (n): {}", pair.n);

    println!("{}", MESSAGE);
    let ciphertext = encrypt(MESSAGE, &pair.e, &pair.n)?;
    let rendered: Vec<String> = ciphertext.iter().map(|c| c.to_string()).collect();
    println!("[{}]", rendered.join(", "));
    let plaintext = decrypt(&ciphertext, &pair.d, &pair.n)?;
    println!("{}", plaintext);

    Ok(())
}
