//! Common regex patterns for contact field extraction.
//!
//! Separators inside phone patterns are limited to space, tab, dot and dash so
//! a match never spans two lines of a card.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Email pattern (local@domain.tld, TLD of two or more letters).
    // ASCII word boundaries: accented letters next to an address are not word
    // characters here.
    pub static ref EMAIL: Regex = Regex::new(
        r"(?-u:\b)[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}(?-u:\b)"
    ).unwrap();

    // Phone families, most specific first.

    // +CC then grouped digits: "+1 555 123 4567", "+44 (20) 7946-0958"
    pub static ref PHONE_INTERNATIONAL: Regex = Regex::new(
        r"\+\d{1,3}[ \t.\-]?\(?\d{1,4}\)?(?:[ \t.\-]?\d{2,4}){1,4}"
    ).unwrap();

    // North-American parenthesized area code: "(555) 123-4567"
    pub static ref PHONE_NORTH_AMERICAN: Regex = Regex::new(
        r"\(\d{3}\)[ \t.\-]?\d{3}[ \t.\-]?\d{4}"
    ).unwrap();

    // Bare three groups with separators: "555-123-4567", "555.123.4567"
    pub static ref PHONE_THREE_GROUP: Regex = Regex::new(
        r"\b\d{3}[ \t.\-]\d{3}[ \t.\-]\d{4}\b"
    ).unwrap();

    // "+" followed directly by 10-15 digits: "+35699123456"
    pub static ref PHONE_PLUS_DIGITS: Regex = Regex::new(
        r"\+\d{10,15}\b"
    ).unwrap();

    // Lines made only of letters, whitespace, periods and hyphens
    pub static ref NAME_LINE: Regex = Regex::new(
        r"^[\p{L}\s.\-]+$"
    ).unwrap();

    // Exactly two alphabetic tokens, i.e. a plain "First Last"
    pub static ref TWO_WORD_NAME: Regex = Regex::new(
        r"^\p{L}+\s+\p{L}+$"
    ).unwrap();

    // WhatsApp deep links
    pub static ref WHATSAPP_SHORT_LINK: Regex = Regex::new(
        r"(?i)wa\.me/(\+?\d+)"
    ).unwrap();

    pub static ref WHATSAPP_SEND_LINK: Regex = Regex::new(
        r"(?i)whatsapp\.com/send\?phone=(\+?\d+)"
    ).unwrap();

    pub static ref WHATSAPP_API_LINK: Regex = Regex::new(
        r"(?i)api\.whatsapp\.com/send\?phone=(\+?\d+)"
    ).unwrap();

    // A payload that is nothing but a phone number
    pub static ref BARE_PHONE: Regex = Regex::new(
        r"^\+?\d{10,15}$"
    ).unwrap();
}
