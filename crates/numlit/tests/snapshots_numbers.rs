#![expect(missing_docs)]

use core::fmt::Write;

use numlit::{create_number, is_creatable, is_parsable};

const CORPUS: &[&str] = &[
    "0",
    "-0",
    "42",
    "+42",
    "017",
    "2147483648",
    "-9223372036854775809",
    "0x1A",
    "#ff",
    "0xFFFFFFFFFF",
    "7L",
    "1.5",
    "1.1",
    "1.5f",
    "1.1d",
    "-.5",
    "1.",
    "1e39",
    "3.14159265358979323846",
    "123.4L",
    "1.2.3",
    "1e",
    "0x",
    "08",
    "",
    " ",
];

fn render(corpus: &[&str]) -> String {
    let mut out = String::new();
    for text in corpus {
        let creatable = is_creatable(Some(text));
        let parsable = is_parsable(Some(text));
        match create_number(Some(text)) {
            Ok(Some(n)) => writeln!(
                out,
                "{text:?} creatable={creatable} parsable={parsable} -> {}({n})",
                n.kind()
            ),
            Ok(None) => unreachable!("text is present"),
            Err(e) => writeln!(
                out,
                "{text:?} creatable={creatable} parsable={parsable} -> error: {}",
                e.kind()
            ),
        }
        .unwrap();
    }
    out
}

#[test]
fn snapshot_create_number_corpus() {
    // Inline snapshot; run `cargo insta test` then `cargo insta review` to
    // update after an intentional change.
    insta::assert_snapshot!(render(CORPUS), @r##"
    "0" creatable=true parsable=true -> i32(0)
    "-0" creatable=true parsable=true -> i32(0)
    "42" creatable=true parsable=true -> i32(42)
    "+42" creatable=true parsable=false -> i32(42)
    "017" creatable=true parsable=true -> i32(15)
    "2147483648" creatable=true parsable=true -> i64(2147483648)
    "-9223372036854775809" creatable=true parsable=true -> BigInt(-9223372036854775809)
    "0x1A" creatable=true parsable=false -> i32(26)
    "#ff" creatable=false parsable=false -> i32(255)
    "0xFFFFFFFFFF" creatable=true parsable=false -> i64(1099511627775)
    "7L" creatable=true parsable=false -> i64(7)
    "1.5" creatable=true parsable=true -> f32(1.5)
    "1.1" creatable=true parsable=true -> f64(1.1)
    "1.5f" creatable=true parsable=false -> f32(1.5)
    "1.1d" creatable=true parsable=false -> f64(1.1)
    "-.5" creatable=true parsable=true -> f32(-0.5)
    "1." creatable=true parsable=false -> f32(1)
    "1e39" creatable=true parsable=false -> f64(1000000000000000000000000000000000000000)
    "3.14159265358979323846" creatable=true parsable=true -> BigDecimal(3.14159265358979323846)
    "123.4L" creatable=false parsable=false -> error: long suffix on a fractional or exponent literal
    "1.2.3" creatable=false parsable=false -> error: more than one decimal point
    "1e" creatable=false parsable=false -> error: exponent marker without exponent digits
    "0x" creatable=false parsable=false -> error: no digits
    "08" creatable=false parsable=true -> error: invalid digit '8' for radix 8
    "" creatable=false parsable=false -> error: a blank string is not a valid number
    " " creatable=false parsable=false -> error: a blank string is not a valid number
    "##);
}
