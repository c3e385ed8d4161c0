/*!
rpsl-parser parses RPSL (Routing Policy Specification Language) text, the attribute-based
object format used by Internet routing registries (RIPE, ARIN, RADb, ...), into ordered,
queryable [RpslObject]s.

# Examples

## Parsing a single object

```
use rpsl_parser::parse_one;

let raw = "person:   John Doe\n\
           address:  1234 Elm Street\n\
           +         Iceland\n\
           nic-hdl:  JD1234-RIPE # handle\n\
           mnt-by:   FOO-MNT\n\
           mnt-by:   BAR-MNT\n\
           source:   RIPE\n";

let obj = parse_one(raw).unwrap();
assert_eq!(obj.get_first("address"), Some("1234 Elm Street Iceland"));
assert_eq!(obj.get_first("NIC-HDL"), Some("JD1234-RIPE"));
assert_eq!(obj.get_all("mnt-by"), vec!["FOO-MNT", "BAR-MNT"]);
assert!(obj.ensure_class("person").is_ok());
assert!(obj.ensure_one("mnt-by").is_err());
```

## Parsing many objects

Objects are separated by one or more empty lines. Lines starting with `%` or `#` are
comments.

```
use rpsl_parser::parse_many;

let raw = "% comment\n\
           route:  192.0.2.0/24\n\
           origin: AS64496\n\
           \n\
           route:  198.51.100.0/24\n\
           origin: AS64497\n";

let objects = parse_many(raw).unwrap();
assert_eq!(objects.len(), 2);
assert_eq!(objects[1].get_first("origin"), Some("AS64497"));
```

## Streaming a registry dump

[RpslParser] reads its source one line at a time and returns objects as they complete.
With the `oneio` feature (on by default) it opens local or remote files, compressed or not.

```no_run
use rpsl_parser::RpslParser;

let parser = RpslParser::new("https://ftp.ripe.net/ripe/dbase/split/ripe.db.mntner.gz").unwrap();
for obj in parser {
    let obj = obj.unwrap();
    println!("{}", obj.get_first("mntner").unwrap_or_default());
}
```
*/

pub mod error;
#[cfg(feature = "oneio")]
mod io;
pub mod models;
pub mod parser;

pub use error::{Cardinality, ParserError, SyntaxError, SyntaxErrorKind, ValidationError};
pub use models::{Attribute, RpslObject};
pub use parser::{KeyGrammar, ObjectIterator, ParserOptions, RpslParser};

use std::io::Read;

/// Parses input that must contain exactly one object.
///
/// Fails with [ParserError::NoObjectsFound] on input without objects and with
/// [ParserError::MultipleObjectsFound] if there is more than one.
pub fn parse_one(input: impl AsRef<[u8]>) -> Result<RpslObject, ParserError> {
    RpslParser::from_reader(input.as_ref()).parse_one()
}

/// Parses all objects in the input. Input without objects gives an empty `Vec`.
pub fn parse_many(input: impl AsRef<[u8]>) -> Result<Vec<RpslObject>, ParserError> {
    RpslParser::from_reader(input.as_ref()).parse_many()
}

/// Like [parse_one], reading from any [Read] source.
pub fn parse_one_from_reader<R: Read>(reader: R) -> Result<RpslObject, ParserError> {
    RpslParser::from_read(reader).parse_one()
}

/// Like [parse_many], reading from any [Read] source.
pub fn parse_many_from_reader<R: Read>(reader: R) -> Result<Vec<RpslObject>, ParserError> {
    RpslParser::from_read(reader).parse_many()
}
