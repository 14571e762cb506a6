/// Parts of the hero block that fade in one after another on load.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeroPart {
    TitleLine(usize),
    Image,
    Description,
    Stats,
    Actions,
}

/// Reveal delay, in milliseconds after mount, for each hero part.
pub fn reveal_schedule(title_lines: usize) -> Vec<(HeroPart, u32)> {
    let mut schedule: Vec<(HeroPart, u32)> = (0..title_lines)
        .map(|line| (HeroPart::TitleLine(line), 200 * (line as u32 + 1)))
        .collect();
    schedule.extend([
        (HeroPart::Image, 600),
        (HeroPart::Description, 800),
        (HeroPart::Stats, 1000),
        (HeroPart::Actions, 1200),
    ]);
    schedule.sort_by_key(|(_, delay)| *delay);
    schedule
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_lines_stagger_before_the_rest() {
        let schedule = reveal_schedule(3);
        assert_eq!(
            schedule,
            vec![
                (HeroPart::TitleLine(0), 200),
                (HeroPart::TitleLine(1), 400),
                (HeroPart::TitleLine(2), 600),
                (HeroPart::Image, 600),
                (HeroPart::Description, 800),
                (HeroPart::Stats, 1000),
                (HeroPart::Actions, 1200),
            ]
        );
    }
}
