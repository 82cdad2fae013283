//! Display implementations for domain models.
//!
//! Models format as markdown for the terminal renderer. Entity lines are
//! compact bullet points; [`Plan`] nests them under section headers.

use std::fmt;

use super::datetime::{LongDate, ShortDate};
use crate::{
    calendar::week_start,
    models::{Milestone, Plan, Resource, Task, VerticalLine},
};

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "- **{}.** {} (`{}`)", self.id, self.name, self.color)
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "- **{}.** {}: {} → {}, line {}",
            self.id,
            self.name,
            ShortDate(&self.start_date),
            ShortDate(&self.end_date),
            self.line
        )?;
        if let Some(resource_id) = self.resource_id {
            write!(f, ", resource {resource_id}")?;
        }
        writeln!(f)
    }
}

impl fmt::Display for Milestone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "- **{}.** {} {} ({}): {}",
            self.id,
            self.kind.glyph(),
            self.name,
            self.kind,
            LongDate(&self.date)
        )?;
        match self.line {
            Some(line) => writeln!(f, ", line {line}"),
            None => writeln!(f),
        }
    }
}

impl fmt::Display for VerticalLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "- **{}.** {}", self.id, LongDate(&self.date))
    }
}

impl Plan {
    /// Task line with the resource resolved to its name.
    fn fmt_task(&self, task: &Task, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "- **{}.** {}: {} → {}, line {}",
            task.id,
            task.name,
            ShortDate(&task.start_date),
            ShortDate(&task.end_date),
            task.line
        )?;
        match task.resource_id {
            Some(id) => match self.resource(id) {
                Some(resource) => writeln!(f, ", {}", resource.name),
                None => writeln!(f, ", missing resource {id}"),
            },
            None => writeln!(f),
        }
    }
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}", self.name)?;
        writeln!(f)?;

        // Last day of the final week.
        let last_day = week_start(self.start_date, self.num_weeks)
            .yesterday()
            .unwrap_or(self.start_date);
        writeln!(f, "- Start: {}", LongDate(&self.start_date))?;
        writeln!(f, "- Weeks: {} (through {})", self.num_weeks, LongDate(&last_day))?;
        writeln!(f, "- Lines: {}", self.num_lines)?;

        writeln!(f, "\n## Resources")?;
        writeln!(f)?;
        if self.resources.is_empty() {
            writeln!(f, "No resources.")?;
        }
        for resource in &self.resources {
            write!(f, "{resource}")?;
        }

        writeln!(f, "\n## Tasks")?;
        writeln!(f)?;
        if self.tasks.is_empty() {
            writeln!(f, "No tasks.")?;
        }
        for task in &self.tasks {
            self.fmt_task(task, f)?;
        }

        writeln!(f, "\n## Milestones")?;
        writeln!(f)?;
        if self.milestones.is_empty() {
            writeln!(f, "No milestones.")?;
        }
        for milestone in &self.milestones {
            write!(f, "{milestone}")?;
        }

        if !self.vertical_lines.is_empty() {
            writeln!(f, "\n## Vertical lines")?;
            writeln!(f)?;
            for line in &self.vertical_lines {
                write!(f, "{line}")?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use crate::models::{Color, MilestoneKind};

    use super::*;

    fn create_test_plan() -> Plan {
        let mut plan = Plan::new("Roadmap", date(2024, 1, 1));
        plan.num_weeks = 4;
        plan.resources.push(Resource {
            id: 1,
            name: "Backend".to_string(),
            color: Color::rgb(0xf1, 0xaa, 0xd0),
        });
        plan.tasks.push(Task {
            id: 2,
            name: "API".to_string(),
            start_date: date(2024, 1, 1),
            end_date: date(2024, 1, 8),
            resource_id: Some(1),
            line: 1,
        });
        plan.tasks.push(Task {
            id: 3,
            name: "Orphan".to_string(),
            start_date: date(2024, 1, 1),
            end_date: date(2024, 1, 8),
            resource_id: Some(99),
            line: 2,
        });
        plan.milestones.push(Milestone {
            id: 4,
            name: "Review".to_string(),
            date: date(2024, 1, 15),
            kind: MilestoneKind::Meeting,
            line: Some(3),
        });
        plan
    }

    #[test]
    fn test_plan_display_sections() {
        let output = create_test_plan().to_string();

        assert!(output.starts_with("# Roadmap\n"));
        assert!(output.contains("- Start: 01/01/2024"));
        assert!(output.contains("- Weeks: 4 (through 28/01/2024)"));
        assert!(output.contains("- **1.** Backend (`#f1aad0`)"));
        assert!(output.contains("- **2.** API: 01/01/24 → 08/01/24, line 1, Backend"));
        assert!(output.contains("missing resource 99"));
        assert!(output.contains("- **4.** 👥 Review (meeting): 15/01/2024, line 3"));
        assert!(!output.contains("## Vertical lines"));
    }

    #[test]
    fn test_empty_plan_display() {
        let output = Plan::new("Empty", date(2024, 1, 1)).to_string();
        assert!(output.contains("No resources."));
        assert!(output.contains("No tasks."));
        assert!(output.contains("No milestones."));
    }

    #[test]
    fn test_task_display_standalone() {
        let plan = create_test_plan();
        assert_eq!(
            plan.tasks[0].to_string(),
            "- **2.** API: 01/01/24 → 08/01/24, line 1, resource 1\n"
        );
    }
}
