//! Shared fixtures: the published hsd vector and a reference signer.
#![allow(dead_code)]

use blake2::digest::consts::U32;
use blake2::{Blake2b, Digest};
use hsig0::wire::{class, Header, Message, Name, Question, RData, Record, RecordType, Sig};
use hsig0::PublicKey;
use k256::ecdsa::signature::hazmat::PrehashSigner;
use k256::ecdsa::{Signature, SigningKey};

pub const SIGNED_RESPONSE: &str = "3b9d8080000100000001000206676f6f676c6503636f6d0000300001c00c000600010000003c0026036e7331c00c09646e732d61646d696ec00c13e862850000038400000384000007080000003c000029100000000000000000001800ff0000000000530000fd00000000005f727e8a5f71d5ca65de008e51424eaf4593c1331d7a60294f0a08f3f686a8f9401bc9aa5768bd045c5dd4452ed6b9959c6b96e4e970e9b79b62ece84152bd8209048d77546d540f7d2c22";

pub const NODE_KEY: &str = "aj7bjss4ae6hd3kdxzl4f6klirzla377uifxu5mnzczzk2v7p76ek";

pub const INCEPTION: u32 = 0x5f71d5ca;
pub const EXPIRATION: u32 = 0x5f727e8a;

pub const KEY_TAG: u16 = 0x1234;

pub fn published_wire() -> Vec<u8> {
    hex::decode(SIGNED_RESPONSE).unwrap()
}

pub fn published_message() -> Message {
    Message::unpack(&published_wire()).unwrap()
}

pub fn node_key() -> PublicKey {
    hsig0::parse_public_key(NODE_KEY).unwrap()
}

pub fn name(s: &str) -> Name {
    s.parse().unwrap()
}

/// An unsigned authoritative TXT answer.
pub fn txt_response(payload: &[u8]) -> Message {
    Message {
        header: Header {
            id: 0x4242,
            response: true,
            authoritative: true,
            ..Header::default()
        },
        questions: vec![Question {
            name: name("proofofconcept."),
            qtype: RecordType::TXT,
            qclass: class::INET,
        }],
        answers: vec![Record {
            name: name("proofofconcept."),
            class: class::INET,
            ttl: 300,
            rdata: RData::Txt(vec![payload.to_vec()]),
        }],
        authority: vec![Record {
            name: name("proofofconcept."),
            class: class::INET,
            ttl: 3600,
            rdata: RData::Ns(name("ns1.proofofconcept.")),
        }],
        additional: Vec::new(),
        compress: false,
    }
}

/// Append a SIG(0) record the way hsd does: BLAKE2b-256 over the SIG rdata
/// (minus signature) followed by the compressed unsigned message, then a
/// prehash ECDSA signature.
pub fn sign(message: &Message, key: &SigningKey, inception: u32, expiration: u32) -> Message {
    let mut preimage = Vec::new();
    preimage.extend_from_slice(&0u16.to_be_bytes()); // type covered
    preimage.push(hsig0::BLAKE2B_SECP256K1);
    preimage.push(0); // labels
    preimage.extend_from_slice(&0u32.to_be_bytes()); // original ttl
    preimage.extend_from_slice(&expiration.to_be_bytes());
    preimage.extend_from_slice(&inception.to_be_bytes());
    preimage.extend_from_slice(&KEY_TAG.to_be_bytes());
    preimage.push(0); // root signer
    preimage.extend_from_slice(&message.pack_with(true).unwrap());

    let digest = Blake2b::<U32>::digest(&preimage);
    let signature: Signature = key.sign_prehash(&digest).unwrap();

    let mut signed = message.clone();
    signed.additional.push(Record {
        name: Name::root(),
        class: class::ANY,
        ttl: 0,
        rdata: RData::Sig(Sig {
            type_covered: 0,
            algorithm: hsig0::BLAKE2B_SECP256K1,
            labels: 0,
            original_ttl: 0,
            expiration,
            inception,
            key_tag: KEY_TAG,
            signer_name: Name::root(),
            signature: signature.to_bytes().to_vec(),
        }),
    });
    signed
}

pub fn signing_key() -> SigningKey {
    SigningKey::random(&mut rand::thread_rng())
}

pub fn public_key(key: &SigningKey) -> PublicKey {
    PublicKey::from(*key.verifying_key())
}
