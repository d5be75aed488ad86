//! Text formatting for the instance header and command line usage

/// Formats the DIMACS header of a pigeonhole instance
pub struct HeaderFormatter;

impl HeaderFormatter {
    /// Comment lines describing the instance, each starting with `c`
    pub fn comment_lines(holes: u64, variables: u64, clauses: u64) -> Vec<String> {
        let pigeons = holes + 1;

        let mut lines = vec![
            format!("pigeon-{}: placing {} pigeons into {} holes", holes, pigeons, holes),
            String::new(),
            format!(
                "File generated by '{}' version {}",
                env!("CARGO_PKG_NAME"),
                env!("CARGO_PKG_VERSION")
            ),
            String::new(),
        ];

        lines.extend(
            [
                "Variable x_{n*(i-1)+j} holds when pigeon i is placed in hole j.",
                "For every hole and every pair of pigeons a binary clause forbids",
                "both pigeons from sharing that hole. For every pigeon one clause",
                "requires it to be placed in at least one of the n holes.",
            ]
            .map(String::from),
        );

        lines.push(String::new());
        lines.push(format!(
            "This gives (n+1) * n = {} variables and (n+1) + n * (n * (n+1) / 2) = {} clauses.",
            variables, clauses
        ));
        lines.push(String::new());
        lines.push("The resulting SAT problem is unsatisfiable.".to_string());
        lines.push(String::new());

        lines
            .into_iter()
            .map(|line| {
                if line.is_empty() {
                    "c".to_string()
                } else {
                    format!("c {}", line)
                }
            })
            .collect()
    }

    /// The single `p cnf V C` line
    pub fn problem_line(variables: u64, clauses: u64) -> String {
        format!("p cnf {} {}", variables, clauses)
    }

    /// Usage guidance printed when the hole count is missing or invalid
    pub fn usage(program: &str) -> String {
        let mut output = String::new();

        output.push_str("Usage:\n");
        output.push('\n');
        output.push_str(&format!("  {} [OPTIONS] n\n", program));
        output.push('\n');
        output.push_str("where n>0 is the number of holes (the number of pigeons is n+1).\n");
        output.push_str(&format!("Run '{} --help' for the list of options.\n", program));

        output
    }
}
