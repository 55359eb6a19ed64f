//! Startup banner.

use console::style;

const BORDER: &str = "#########################################";

pub(super) fn print_banner() {
    let edge = style(BORDER).green();
    let side = style("#").green();
    println!();
    println!("    {}", edge);
    println!("    {}{:39}{}", side, "", side);
    println!(
        "    {}       {}       {}",
        side,
        style("XRC Reflection Candidates").bold(),
        side
    );
    println!(
        "    {}  {}  {}",
        side,
        style("one URL per parameter, {payload} in").dim(),
        side
    );
    println!("    {}{:39}{}", side, "", side);
    println!("    {}", edge);
    println!("    {}", style("Usage:").bold());
    println!("    xrc urls.txt --threads 2 --output output_reflection.txt");
    println!();
}
