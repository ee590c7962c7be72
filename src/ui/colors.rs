use crossterm::style::Color;

// Palette for the terminal views
pub fn header_bg() -> Color {
    Color::AnsiValue(21)
} // Bright blue
pub fn header_fg() -> Color {
    Color::AnsiValue(231)
} // Pure white
pub fn subheader_fg() -> Color {
    Color::AnsiValue(51)
} // Bright cyan
pub fn text_fg() -> Color {
    Color::AnsiValue(231)
} // Pure white
pub fn muted_fg() -> Color {
    Color::AnsiValue(245)
} // Mid grey
pub fn status_fg() -> Color {
    Color::AnsiValue(226)
} // Bright yellow
pub fn error_fg() -> Color {
    Color::AnsiValue(196)
} // Bright red
pub fn win_fg() -> Color {
    Color::AnsiValue(46)
} // Bright green
pub fn loss_fg() -> Color {
    Color::AnsiValue(196)
} // Bright red
pub fn neutral_fg() -> Color {
    Color::AnsiValue(245)
} // Mid grey
pub fn current_page_fg() -> Color {
    Color::AnsiValue(46)
} // Bright green
