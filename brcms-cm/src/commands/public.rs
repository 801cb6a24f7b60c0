//! Landing-page views, no session needed

use crate::console::{Console, Outcome};
use crate::prompt::Prompt;
use crate::render;
use anyhow::Result;
use brcms_common::public::{latest_performances, tracks, NO_PERFORMANCES_TEXT, NO_TRACKS_TEXT};
use std::io::Write;

impl<C: Prompt> Console<C> {
    pub(crate) fn public<W: Write>(&mut self, out: &mut W) -> Result<Outcome> {
        writeln!(out, "Aktuelle Gigs")?;
        let gigs = latest_performances(&self.store);
        if gigs.is_empty() {
            writeln!(out, "{}", NO_PERFORMANCES_TEXT)?;
        }
        for gig in &gigs {
            for line in render::public_performance(gig) {
                writeln!(out, "{}", line)?;
            }
        }

        writeln!(out)?;
        writeln!(out, "Musik")?;
        let tracks = tracks(&self.store);
        if tracks.is_empty() {
            writeln!(out, "{}", NO_TRACKS_TEXT)?;
        }
        for track in &tracks {
            writeln!(out, "{}", render::public_track(track))?;
        }
        Ok(Outcome::Done)
    }
}
