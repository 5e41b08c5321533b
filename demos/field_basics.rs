//! Prime Field Basics
//!
//! This example walks through `FieldElement` operations over GF(57) and GF(31):
//! - Equality and display
//! - Addition, subtraction and multiplication
//! - Division and exponentiation via Fermat's little theorem
//! - The errors returned for misuse
//!
//! Run with: RUST_LOG=trace cargo run --example field_basics

use primefield::{FieldElement, FieldError};

fn main() -> Result<(), FieldError> {
    env_logger::init();

    println!("=== Prime Field Basics ===\n");

    equality_and_arithmetic()?;
    division()?;
    exponentiation()?;
    misuse();

    Ok(())
}

/// Equality, addition and multiplication over GF(57)
fn equality_and_arithmetic() -> Result<(), FieldError> {
    println!("--- Arithmetic over GF(57) ---\n");

    let a = FieldElement::new(25, 57)?;
    let b = FieldElement::new(19, 57)?;

    println!("a = {}", a);
    println!("b = {}", b);
    println!();

    println!("a == b? {}", a == b);
    println!("a == a? {}", a == a.clone());
    println!("a != b? {}", a != b);
    println!();

    println!("a + b = {}", a.try_add(&b)?);
    println!("a + a = {}", a.try_add(&a)?);
    println!("a - b = {}", a.try_sub(&b)?);
    println!("b - a = {}", b.try_sub(&a)?);
    println!("a * b = {}", a.try_mul(&b)?);
    println!("a * a = {}", a.try_mul(&a)?);
    println!("-a = {}", -&a);

    println!();
    Ok(())
}

/// Division over GF(31)
fn division() -> Result<(), FieldError> {
    println!("--- Division over GF(31) ---\n");

    let c = FieldElement::new(3, 31)?;
    let d = FieldElement::new(24, 31)?;
    println!("{} / {} = {}", c.value(), d.value(), (&c / &d)?);

    let c = FieldElement::new(17, 31)?;
    let d = FieldElement::new(3, 31)?;
    println!("{} / {} = {}", c.value(), d.value(), (&c / &d)?);

    let c = FieldElement::new(4, 31)?;
    let d = FieldElement::new(4, 31)?;
    let e = FieldElement::new(11, 31)?;
    let result = (&(&c / &d)? * &e)?;
    println!(
        "({} / {}) * {} = {}",
        c.value(),
        d.value(),
        e.value(),
        result
    );

    println!();
    Ok(())
}

/// Exponentiation, including negative exponents
fn exponentiation() -> Result<(), FieldError> {
    println!("--- Exponentiation over GF(31) ---\n");

    let a = FieldElement::new(3, 31)?;
    println!("a = {}", a);
    println!("a^3 = {}", a.pow(3));
    println!("a^30 = {} (Fermat's little theorem)", a.pow(30));
    println!("a^-1 = {}", a.pow(-1));
    println!("a * a^-1 = {}", a.try_mul(&a.pow(-1))?);
    println!("0^0 = {} (by convention)", FieldElement::zero(31)?.pow(0));
    println!("is 31 prime? {}", a.order_is_prime());

    println!();
    Ok(())
}

/// The three ways to misuse the API
fn misuse() {
    println!("--- Errors ---\n");

    if let Err(err) = FieldElement::new(57, 57) {
        println!("new(57, 57): {}", err);
    }

    let a = FieldElement::new(3, 31).expect("3 is in GF(31)");
    let b = FieldElement::new(3, 57).expect("3 is in GF(57)");
    if let Err(err) = a.try_add(&b) {
        println!("GF(31) + GF(57): {}", err);
    }

    let zero = FieldElement::zero(31).expect("GF(31) has a zero");
    if let Err(err) = a.try_div(&zero) {
        println!("3 / 0: {}", err);
    }
}
