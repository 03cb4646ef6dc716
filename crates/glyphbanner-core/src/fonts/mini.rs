//! Three-row compact font
//!
//! Lowercase letters reuse the uppercase shapes.
//!
//! ```text
//!      ___      ___        _  |
//! |\/|  |  |\ |  |    |_|_  ) |
//! |  | _|_ | \| _|_     |  /_ o
//! ```

pub(super) const GLYPHS: &[(&str, &[&str])] = &[
    (" ", &["  ", "  ", "  "]),
    ("A", &[" _  ", "|_| ", "| | "]),
    ("B", &[" _  ", "|_) ", "|_) "]),
    ("C", &[" _  ", "/   ", "\\_  "]),
    ("D", &[" _  ", "| \\ ", "|_/ "]),
    ("E", &[" _  ", "|_  ", "|_  "]),
    ("F", &[" _  ", "|_  ", "|   "]),
    ("G", &[" __ ", "/__ ", "\\_| "]),
    ("H", &["    ", "|_| ", "| | "]),
    ("I", &["___ ", " |  ", "_|_ "]),
    ("J", &["    ", "  | ", "\\_| "]),
    ("K", &["   ", "|/ ", "|\\ "]),
    ("L", &["   ", "|  ", "|_ "]),
    ("M", &["     ", "|\\/| ", "|  | "]),
    ("N", &["     ", "|\\ | ", "| \\| "]),
    ("O", &[" _  ", "/ \\ ", "\\_/ "]),
    ("P", &[" _  ", "|_) ", "|   "]),
    ("Q", &[" _  ", "/ \\ ", "\\_X "]),
    ("R", &[" _  ", "|_) ", "| \\ "]),
    ("S", &[" __ ", "(_  ", "__) "]),
    ("T", &["___ ", " |  ", " |  "]),
    ("U", &["    ", "| | ", "|_| "]),
    ("V", &["     ", "\\  / ", " \\/  "]),
    ("W", &["       ", "\\    / ", " \\/\\/  "]),
    ("X", &["   ", "\\/ ", "/\\ "]),
    ("Y", &["    ", "\\_/ ", " |  "]),
    ("Z", &["__ ", " / ", "/_ "]),
    ("0", &[" _  ", "/ \\ ", "\\_/ "]),
    ("1", &["   ", "/| ", " | "]),
    ("2", &["_  ", " ) ", "/_ "]),
    ("3", &["_  ", "_) ", "_) "]),
    ("4", &["     ", "|_|_ ", "  |  "]),
    ("5", &[" _  ", "|_  ", " _) "]),
    ("6", &[" _  ", "|_  ", "|_) "]),
    ("7", &["__ ", " / ", "/  "]),
    ("8", &[" _  ", "(_) ", "(_) "]),
    ("9", &[" _  ", "(_| ", "  | "]),
    ("!", &["| ", "| ", "o "]),
    ("\"", &["|| ", "   ", "   "]),
    ("#", &["_|_|_ ", "_|_|_ ", " | |  "]),
    ("$", &["_|_ ", "(|_ ", "_|) "]),
    ("%", &["o / ", " /  ", "/ o "]),
    ("&", &[" _  ", "(_) ", "(_X "]),
    ("'", &["| ", "  ", "  "]),
    ("(", &[" / ", "|  ", " \\ "]),
    (")", &["\\  ", " | ", "/  "]),
    ("*", &["\\|/ ", "/|\\ ", "    "]),
    ("+", &["    ", "_|_ ", " |  "]),
    (",", &["   ", "   ", " / "]),
    ("-", &["    ", "___ ", "    "]),
    (".", &["  ", "  ", "o "]),
    ("/", &["  / ", " /  ", "/   "]),
    (":", &["  ", "o ", "o "]),
    (";", &["   ", " o ", " / "]),
    ("<", &["   ", " / ", " \\ "]),
    ("=", &["___ ", "___ ", "    "]),
    (">", &["   ", "\\  ", "/  "]),
    ("?", &["__  ", " _) ", " o  "]),
    ("@", &[" __  ", "/(_| ", "\\__  "]),
    ("[", &[" _ ", "|  ", "|_ "]),
    ("\\", &["\\   ", " \\  ", "  \\ "]),
    ("]", &["_  ", " | ", "_| "]),
    ("^", &["/\\ ", "   ", "   "]),
    ("_", &["    ", "    ", "___ "]),
    ("`", &["\\ ", "  ", "  "]),
    ("{", &["  _ ", "_|  ", " |_ "]),
    ("|", &["| ", "| ", "| "]),
    ("}", &["_   ", " |_ ", "_|  "]),
    ("~", &["    ", "/\\/ ", "    "]),
];
