//! # Roster CLI Application
//!
//! Terminal front end for the student roster engine. All argument parsing
//! and output formatting happens here; every domain rule lives in
//! `roster_core`.
//!
//! ## Usage
//!
//! ```text
//! roster_cli [command] [args...]
//! ```
//!
//! With no command, the shell starts in interactive mode (`help` for the
//! command list, `exit` to quit). On startup it loads `students.roster`
//! from the working directory if present, otherwise seeds a small sample
//! roster.

use std::env;
use std::io::{self, BufRead, Write};
use std::path::Path;

use roster_core::calculator;
use roster_core::grading::Gradeable;
use roster_core::records::{GraduateRecord, StudentRecord};
use roster_core::roster::Roster;
use roster_core::{load_roster, save_roster};

/// Default roster file in the working directory
const DEFAULT_ROSTER_FILE: &str = "students.roster";

fn main() {
    let mut roster = match load_roster(Path::new(DEFAULT_ROSTER_FILE)) {
        Ok(roster) => {
            println!("Loaded existing student data.");
            roster
        }
        Err(_) => sample_roster(),
    };

    let args: Vec<String> = env::args().skip(1).collect();
    if args.is_empty() {
        println!("No command provided. Starting interactive mode...");
        interactive_mode(&mut roster);
    } else {
        run_command(&mut roster, &args);
    }
}

/// Starter data used when no saved roster exists
fn sample_roster() -> Roster {
    let mut roster = Roster::new();
    roster.insert(StudentRecord::new("Alice", 20, 3.8).expect("sample data").into());
    roster.insert(StudentRecord::new("Bob", 21, 3.2).expect("sample data").into());
    roster.insert(StudentRecord::new("Charlie", 19, 3.9).expect("sample data").into());
    roster.insert(
        GraduateRecord::new(
            "Diana",
            26,
            3.85,
            "Machine Learning in Healthcare",
            "Dr. Johnson",
            true,
        )
        .expect("sample data")
        .into(),
    );
    roster
}

fn interactive_mode(roster: &mut Roster) {
    println!();
    println!("=== Student Management System ===");
    println!("Type 'help' for commands, 'exit' to quit");
    println!();

    let stdin = io::stdin();
    loop {
        print!("> ");
        if io::stdout().flush().is_err() {
            break;
        }

        let mut input = String::new();
        match stdin.lock().read_line(&mut input) {
            Ok(0) | Err(_) => break, // EOF or read failure
            Ok(_) => {}
        }

        let input = input.trim();
        if input.is_empty() {
            continue;
        }
        if input.eq_ignore_ascii_case("exit") {
            println!("Goodbye!");
            break;
        }
        if input.eq_ignore_ascii_case("help") {
            print_help();
            continue;
        }

        let args: Vec<String> = input.split_whitespace().map(String::from).collect();
        run_command(roster, &args);
    }
}

fn run_command(roster: &mut Roster, args: &[String]) {
    match args[0].to_lowercase().as_str() {
        "add" => {
            if args.len() != 4 {
                println!("Usage: add <name> <age> <gpa>");
                return;
            }
            let (Some(age), Some(gpa)) = (parse_u32(&args[2]), parse_f64(&args[3])) else {
                return;
            };
            match StudentRecord::new(&args[1], age, gpa) {
                Ok(student) => {
                    roster.insert(student.into());
                    println!("Added: {}", args[1]);
                }
                Err(e) => println!("Error: {}", e),
            }
        }

        "addgrad" => {
            if args.len() != 7 {
                println!("Usage: addgrad <name> <age> <gpa> <thesis> <advisor> <isPhD>");
                return;
            }
            let (Some(age), Some(gpa)) = (parse_u32(&args[2]), parse_f64(&args[3])) else {
                return;
            };
            let doctoral = args[6].eq_ignore_ascii_case("true");
            match GraduateRecord::new(&args[1], age, gpa, &args[4], &args[5], doctoral) {
                Ok(grad) => {
                    roster.insert(grad.into());
                    println!("Added graduate student: {}", args[1]);
                }
                Err(e) => println!("Error: {}", e),
            }
        }

        "list" => {
            println!();
            println!("=== All Students ===");
            for record in roster.all() {
                println!("{}", record);
            }
        }

        "find" => {
            if args.len() != 2 {
                println!("Usage: find <name>");
                return;
            }
            match roster.find_by_name(&args[1]) {
                Some(record) => println!("Found: {}", record),
                None => println!("Student not found: {}", args[1]),
            }
        }

        "honors" => {
            println!();
            println!("=== Honor Roll Students ===");
            for record in roster.honor_roll_members() {
                println!("{}", record);
            }
        }

        "average" => {
            println!("Average GPA: {:.2}", roster.average_gpa());
        }

        "sort" => {
            println!();
            println!("=== Students Sorted by GPA ===");
            for record in roster.ranked_by_gpa() {
                println!("{}", record);
            }
        }

        "remove" => {
            if args.len() != 2 {
                println!("Usage: remove <name>");
                return;
            }
            if roster.remove(&args[1]) {
                println!("Removed: {}", args[1]);
            } else {
                println!("Student not found: {}", args[1]);
            }
        }

        "count" => {
            println!("Total students: {}", roster.count());
        }

        "grade" => {
            if args.len() != 2 {
                println!("Usage: grade <name>");
                return;
            }
            match roster.find_by_name(&args[1]) {
                Some(record) => {
                    println!();
                    println!("=== Grade Information for {} ===", record.name());
                    println!("GPA: {}", record.gpa());
                    println!("Letter Grade: {}", record.letter_grade());
                    println!("Passing: {}", yes_no(record.is_passing()));
                    println!("Honor Roll: {}", yes_no(record.is_honor_roll()));
                    println!("Academic Standing: {}", record.academic_standing());
                }
                None => println!("Student not found: {}", args[1]),
            }
        }

        "calc" => run_calculator_command(args),

        "save" => {
            let path = args.get(1).map(String::as_str).unwrap_or(DEFAULT_ROSTER_FILE);
            match save_roster(roster, Path::new(path)) {
                Ok(()) => println!("Saved to: {}", path),
                Err(e) => print_persistence_error("saving", &e),
            }
        }

        "load" => {
            let path = args.get(1).map(String::as_str).unwrap_or(DEFAULT_ROSTER_FILE);
            match load_roster(Path::new(path)) {
                Ok(loaded) => {
                    *roster = loaded;
                    println!("Loaded from: {}", path);
                }
                Err(e) => print_persistence_error("loading", &e),
            }
        }

        "interactive" => interactive_mode(roster),

        _ => print_help(),
    }
}

fn run_calculator_command(args: &[String]) {
    if args.len() < 2 {
        println!("Usage: calc <subcommand> [args...]");
        println!("Subcommands:");
        println!("  letter <percentage>              - Convert percentage to letter grade");
        println!("  gpa <letterGrade>                - Convert letter grade to GPA");
        println!("  required <currentGPA> <currentCredits> <targetGPA> <remainingCredits>");
        return;
    }

    match args[1].to_lowercase().as_str() {
        "letter" => {
            if args.len() != 3 {
                println!("Usage: calc letter <percentage>");
                return;
            }
            let Some(percentage) = parse_f64(&args[2]) else {
                return;
            };
            match calculator::percentage_to_letter(percentage) {
                Ok(letter) => println!("{}% = {}", percentage, letter),
                Err(e) => println!("Error: {}", e),
            }
        }

        "gpa" => {
            if args.len() != 3 {
                println!("Usage: calc gpa <letterGrade>");
                return;
            }
            match calculator::letter_to_gpa_points(&args[2]) {
                Ok(points) => println!("{} = {} GPA", args[2], points),
                Err(e) => println!("Error: {}", e),
            }
        }

        "required" => {
            if args.len() != 6 {
                println!("Usage: calc required <currentGPA> <currentCredits> <targetGPA> <remainingCredits>");
                return;
            }
            let (Some(current_gpa), Some(current_credits), Some(target_gpa), Some(remaining)) = (
                parse_f64(&args[2]),
                parse_u32(&args[3]),
                parse_f64(&args[4]),
                parse_u32(&args[5]),
            ) else {
                return;
            };

            match calculator::required_future_gpa(current_gpa, current_credits, target_gpa, remaining)
            {
                Ok(required) => {
                    println!(
                        "To reach {:.2} GPA, you need {:.2} GPA in remaining {} credits",
                        target_gpa, required, remaining
                    );
                    if required > 4.0 {
                        println!("WARNING: This is impossible (requires GPA > 4.0)");
                    } else if required < 0.0 {
                        println!(
                            "Good news: You can achieve this even with 0.0 in remaining courses!"
                        );
                    }
                }
                Err(e) => println!("Error: {}", e),
            }
        }

        other => println!("Unknown calculator subcommand: {}", other),
    }
}

/// Human-readable message plus the structured JSON form for tooling
fn print_persistence_error(operation: &str, error: &roster_core::RosterError) {
    println!("Error {}: {}", operation, error);
    if let Ok(json) = serde_json::to_string_pretty(error) {
        eprintln!("Error JSON:");
        eprintln!("{}", json);
    }
}

fn parse_u32(s: &str) -> Option<u32> {
    match s.parse() {
        Ok(v) => Some(v),
        Err(_) => {
            println!("Error: Invalid number format");
            None
        }
    }
}

fn parse_f64(s: &str) -> Option<f64> {
    match s.parse() {
        Ok(v) => Some(v),
        Err(_) => {
            println!("Error: Invalid number format");
            None
        }
    }
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "Yes"
    } else {
        "No"
    }
}

fn print_help() {
    println!();
    println!("=== Available Commands ===");
    println!("add <name> <age> <gpa>                 - Add a student");
    println!("addgrad <name> <age> <gpa> <thesis> <advisor> <isPhD>");
    println!("                                       - Add a graduate student");
    println!("list                                   - List all students");
    println!("find <name>                            - Find student by name");
    println!("honors                                 - List honor roll students");
    println!("average                                - Show average GPA");
    println!("sort                                   - Show students sorted by GPA");
    println!("remove <name>                          - Remove a student");
    println!("count                                  - Show student count");
    println!("grade <name>                           - Show grade details for student");
    println!("calc <subcommand> [args...]            - Grade calculator operations");
    println!("save [filename]                        - Save students to file");
    println!("load [filename]                        - Load students from file");
    println!("help                                   - Show this help");
    println!("exit                                   - Exit program");
    println!();
}
