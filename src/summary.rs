use crate::draw_engine::DrawEngine;
use crate::prize::PrizeStatus;

fn status_label(status: PrizeStatus) -> &'static str {
    match status {
        PrizeStatus::NotStarted => "not started",
        PrizeStatus::Drawing => "drawing",
        PrizeStatus::Complete => "complete",
    }
}

fn join_numbers(numbers: &[i64]) -> String {
    numbers.iter().map(i64::to_string).collect::<Vec<_>>().join(", ")
}

/// One line per prize: drawn/target, state and winners so far.
pub fn render_progress<R>(engine: &DrawEngine<R>) -> String {
    let Some(config) = engine.configuration() else {
        return "no draw configured\n".to_string();
    };
    let mut out = format!(
        "range {}..={}, {} eligible numbers, {} drawn\n",
        config.range_start(),
        config.range_end(),
        engine.pool_size(),
        engine.used_count()
    );
    for (prize, winners) in engine.results() {
        let status = engine.status(prize.name()).unwrap_or(PrizeStatus::NotStarted);
        out.push_str(&format!(
            "  {} [{}/{}] {}",
            prize.name(),
            winners.len(),
            prize.count(),
            status_label(status)
        ));
        if !winners.is_empty() {
            out.push_str(": ");
            out.push_str(&join_numbers(winners));
        }
        out.push('\n');
    }
    out
}

/// Final winner listing, prize by prize.
pub fn render_results<R>(engine: &DrawEngine<R>) -> String {
    let mut out = String::new();
    for (prize, winners) in engine.results() {
        out.push_str(prize.name());
        out.push('\n');
        if winners.is_empty() {
            out.push_str("    (no winners drawn)\n");
        } else {
            out.push_str(&format!("    {}\n", join_numbers(winners)));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw_engine::DrawOutcome;
    use crate::prize::Prize;

    #[test]
    fn test_render_progress_and_results() {
        let mut engine = DrawEngine::seeded(7);
        engine
            .set_configuration(1, 20, vec![Prize::new("Grand", 1).expect("prize"), Prize::new("Lucky", 2).expect("prize")])
            .expect("config");
        let Ok(DrawOutcome::Winner(n)) = engine.draw_once("Grand") else {
            panic!("expected a winner");
        };

        let progress = render_progress(&engine);
        assert!(progress.starts_with("range 1..=20, 18 eligible numbers, 1 drawn"), "{progress}");
        assert!(progress.contains(&format!("Grand [1/1] complete: {n}")), "{progress}");
        assert!(progress.contains("Lucky [0/2] not started"), "{progress}");

        let results = render_results(&engine);
        assert_eq!(results, format!("Grand\n    {n}\nLucky\n    (no winners drawn)\n"));
    }

    #[test]
    fn test_render_unconfigured() {
        let engine = DrawEngine::seeded(0);
        assert_eq!(render_progress(&engine), "no draw configured\n");
        assert_eq!(render_results(&engine), "");
    }
}
