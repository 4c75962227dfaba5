use crate::input::{lines, sections};
use crate::runner::Options;
use anyhow::{bail, Context, Result};
use bitvec::prelude::*;
use itertools::Itertools;
use log::debug;

struct Rules(BitVec);

impl Rules {
    fn parse(text: &str) -> Result<Rules> {
        let mut rules = bitvec![0; 100 * 100];
        for line in lines(text) {
            let &[x, y] = &line.split('|').map(parse_page).collect::<Result<Vec<_>>>()?[..] else {
                bail!("cannot parse rule {:?}", line)
            };
            rules.set(100 * x + y, true);
        }
        Ok(Rules(rules))
    }

    fn before(&self, x: usize, y: usize) -> bool {self.0[100 * x + y]}

    fn is_ordered(&self, update: &[usize]) -> bool {
        update.iter().tuple_combinations().all(|(&x, &y)| !self.before(y, x))
    }

    fn reorder(&self, update: &[usize]) -> Result<Vec<usize>> {
        let mut unsorted = update.to_vec();
        let mut sorted = Vec::with_capacity(unsorted.len());
        while !unsorted.is_empty() {
            let Some(x_at) = unsorted.iter().position(|&x| unsorted.iter().all(|&y| !self.before(y, x))) else {
                bail!("rules form a cycle among {:?}", unsorted)
            };
            sorted.push(unsorted.remove(x_at));
        }
        Ok(sorted)
    }
}

fn parse_page(page: &str) -> Result<usize> {
    let page = page.trim().parse::<usize>().with_context(|| format!("bad page {:?}", page))?;
    if page >= 100 {bail!("page {} has more than two digits", page)}
    Ok(page)
}

fn parse_updates(text: &str) -> Result<Vec<Vec<usize>>> {
    lines(text).map(|line| -> Result<Vec<usize>> {
        let update = line.split(',').map(parse_page).collect::<Result<Vec<_>>>()?;
        if update.is_empty() {bail!("empty update")}
        Ok(update)
    }).collect()
}

pub fn solve(part: u8, input: &str, _options: &Options) -> Result<String> {
    let sections = sections(input);
    let &[rules, updates] = &sections[..] else {
        bail!("expected rules and updates separated by a blank line, found {} sections", sections.len())
    };
    let rules = Rules::parse(rules)?;
    let updates = parse_updates(updates)?;
    debug!("{} updates", updates.len());

    if part == 1 {
        Ok(updates.iter()
                  .filter(|update| rules.is_ordered(update))
                  .map(|update| update[update.len() / 2])
                  .sum::<usize>().to_string())
    } else {
        let mut total = 0;
        for update in updates.iter().filter(|update| !rules.is_ordered(update)) {
            let update = rules.reorder(update)?;
            debug!("reordered: {:?}", update);
            total += update[update.len() / 2];
        }
        Ok(total.to_string())
    }
}
