pub fn run() {
    println!("termwin — terminal menus and text panels");
    println!();
    println!("Usage: termwin [--config FILE] [--log-file FILE] <command>");
    println!();
    println!("Commands:");
    println!("  menu         Pick one of the given options and print it");
    println!("  view         Page through a text file");
    println!("  completions  Generate shell completions");
    println!();
    println!("Run `termwin <command> --help` for more info on a command.");
}
