use rpsl_parser::parse_one;

/// Parse a person object and print its address and maintainers.
fn main() {
    let raw = "person:\tJohn Doe\n\
               address:\t1234 Elm Street Iceland\n\
               phone:\t\t+1 555 123456\n\
               nic-hdl:\tJD1234-RIPE\n\
               mnt-by:\tFOO-MNT\n\
               mnt-by:\tBAR-MNT\n\
               source:\tRIPE";

    let obj = match parse_one(raw) {
        Ok(obj) => obj,
        Err(err) => {
            eprintln!("failed to parse RPSL object: {}", err);
            std::process::exit(1);
        }
    };

    println!("--- Address ---");
    println!("{}\n", obj.get_first("address").unwrap_or_default());

    println!("--- Maintainers ---");
    for mntner in obj.get_all("mnt-by") {
        println!("{}", mntner);
    }
}
