use regex::Regex;

/// Identifiers never turned into call nodes. The check only ever sees the
/// first identifier captured before a `(`, so qualified member calls are not
/// filtered beyond this list.
const EXCLUDED_CALLS: &[&str] = &["console", "log", "require", "import", "exports", "module"];

/// Synthesizes Mermaid flowchart documents from raw source text.
///
/// The graph is a star: `Start --> Main`, one edge from `Main` per retained
/// call-like token, then `Main --> End`. It is not a call sequence or tree.
pub struct FlowchartGenerator {
    call_regex: Regex,
}

impl FlowchartGenerator {
    pub fn new() -> Self {
        Self {
            call_regex: Regex::new(r"(\w+)\([^)]*\)").expect("invalid call regex"),
        }
    }

    /// Produce a `# Flowchart` Markdown document for the given source text.
    /// Only JS/TS gets real call extraction; every other language yields the
    /// trivial Start/Main/End graph.
    pub fn generate(&self, content: &str, extension: &str) -> String {
        let body = match extension {
            "js" | "ts" => self.javascript_body(content),
            _ => Self::trivial_body(),
        };

        format!("# Flowchart\n\n```mermaid\nflowchart TD\n{}\n```\n", body)
    }

    fn javascript_body(&self, content: &str) -> String {
        let calls: Vec<&str> = self
            .call_regex
            .captures_iter(content)
            .filter_map(|caps| caps.get(1))
            .map(|m| m.as_str())
            .filter(|name| !EXCLUDED_CALLS.contains(name))
            .collect();

        let mut flowchart = String::from("Start --> Main;\n");
        for (index, call) in calls.iter().enumerate() {
            flowchart.push_str(&format!("Main --> {call}{index};\n"));
            flowchart.push_str(&format!("{call}{index}[{call} function];\n"));
        }
        flowchart.push_str("Main --> End;");

        flowchart
    }

    fn trivial_body() -> String {
        "Start --> Main;\nMain --> End;".to_string()
    }
}

impl Default for FlowchartGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calls_fan_out_from_main() {
        let generator = FlowchartGenerator::new();
        let chart = generator.generate("foo(); bar(foo());", "js");

        assert!(chart.starts_with("# Flowchart\n\n```mermaid\nflowchart TD\n"));
        assert!(chart.contains("Start --> Main;\n"));
        assert!(chart.contains("Main --> foo0;\n"));
        assert!(chart.contains("foo0[foo function];\n"));
        assert!(chart.contains("Main --> bar1;\n"));
        assert!(chart.contains("bar1[bar function];\n"));
        assert!(chart.contains("Main --> End;"));
        // Nodes wire back through Main, never to each other
        assert!(!chart.contains("foo0 --> bar1"));
    }

    #[test]
    fn test_excluded_identifiers_are_dropped() {
        let generator = FlowchartGenerator::new();
        let chart = generator.generate("fetchData(); console.log(x); run(1);", "js");

        assert!(chart.contains("Main --> fetchData0;\n"));
        assert!(chart.contains("Main --> run1;\n"));
        assert!(!chart.contains("log"));
        assert!(!chart.contains("console"));
    }

    #[test]
    fn test_python_gets_trivial_graph() {
        let generator = FlowchartGenerator::new();
        let chart = generator.generate("do_work()\nmore_work()\n", "py");
        assert!(chart.contains("Start --> Main;\nMain --> End;"));
        assert!(!chart.contains("do_work"));
    }

    #[test]
    fn test_unknown_language_gets_trivial_graph() {
        let generator = FlowchartGenerator::new();
        let chart = generator.generate("whatever()", "zig");
        assert!(chart.contains("Start --> Main;\nMain --> End;"));
    }

    #[test]
    fn test_fenced_mermaid_wrapper() {
        let generator = FlowchartGenerator::new();
        let chart = generator.generate("", "js");
        assert!(chart.starts_with("# Flowchart\n\n```mermaid\n"));
        assert!(chart.ends_with("```\n"));
    }
}
