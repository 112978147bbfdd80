#![no_std]
use soroban_sdk::{contract, contracterror, contractimpl, symbol_short, Address, Env, String};

mod storage_types;
use storage_types::{DataKey, RECORD_TTL_EXTEND, RECORD_TTL_THRESHOLD};

// Stack buffer capacity for assembling encoded records and greetings.
const ENCODE_BUF_LEN: usize = 512;

const GREETING_PREFIX: &[u8] = b"Hello, ";

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    RecordTooLong = 1,
}

#[contract]
pub struct StudentRegistry;

#[contractimpl]
impl StudentRegistry {
    /// Register or update the record for `student`. Requires authorization
    /// from `student`, so an account can only write its own entry.
    ///
    /// The fields are stored as a single pipe-separated string in the order
    /// name, roll_no, city, phone_number. A record without a phone number
    /// has three fields instead of four. Writing replaces any prior record
    /// for the same address.
    ///
    /// # Arguments
    /// * `student` - The account the record belongs to
    /// * `name` - Student name
    /// * `roll_no` - Roll number
    /// * `city` - City of residence
    /// * `phone_number` - Optional phone number
    pub fn add_student(
        e: Env,
        student: Address,
        name: String,
        roll_no: String,
        city: String,
        phone_number: Option<String>,
    ) -> Result<(), Error> {
        student.require_auth();

        let record = match &phone_number {
            Some(phone) => encode_record(&e, &[&name, &roll_no, &city, phone])?,
            None => encode_record(&e, &[&name, &roll_no, &city])?,
        };

        let key = DataKey::Student(student.clone());
        e.storage().persistent().set(&key, &record);
        e.storage()
            .persistent()
            .extend_ttl(&key, RECORD_TTL_THRESHOLD, RECORD_TTL_EXTEND);

        e.events()
            .publish((symbol_short!("add"), student), record);

        Ok(())
    }

    /// Retrieve the stored record for `student`, if any.
    ///
    /// Any address may be queried, not only the caller's own. Returns the
    /// encoded string exactly as stored; no decoding is performed.
    pub fn get_student(e: Env, student: Address) -> Option<String> {
        e.storage().persistent().get(&DataKey::Student(student))
    }

    /// Return the greeting "Hello, " followed by `name`.
    pub fn hello(e: Env, name: String) -> Result<String, Error> {
        let mut buf = [0u8; ENCODE_BUF_LEN];
        buf[..GREETING_PREFIX.len()].copy_from_slice(GREETING_PREFIX);

        let n = name.len() as usize;
        let len = GREETING_PREFIX.len() + n;
        if len > buf.len() {
            return Err(Error::RecordTooLong);
        }
        name.copy_into_slice(&mut buf[GREETING_PREFIX.len()..len]);

        Ok(String::from_bytes(&e, &buf[..len]))
    }
}

/// Join `fields` with the `|` separator in the given order.
///
/// Field contents are taken as-is: empty values are allowed and embedded
/// pipe characters are not escaped.
fn encode_record(e: &Env, fields: &[&String]) -> Result<String, Error> {
    let mut buf = [0u8; ENCODE_BUF_LEN];
    let mut len: usize = 0;

    for (i, field) in fields.iter().enumerate() {
        if i > 0 {
            if len >= buf.len() {
                return Err(Error::RecordTooLong);
            }
            buf[len] = b'|';
            len += 1;
        }

        let n = field.len() as usize;
        if len + n > buf.len() {
            return Err(Error::RecordTooLong);
        }
        field.copy_into_slice(&mut buf[len..len + n]);
        len += n;
    }

    Ok(String::from_bytes(e, &buf[..len]))
}
