#![no_main]
use itertools::Itertools;
use libfuzzer_sys::fuzz_target;
use treffpunkt::{rank, RankOptions, SlotStore};

fuzz_target!(|data: (SlotStore, RankOptions)| {
    #[cfg(feature = "log")]
    let _ = fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{}][{}] {}",
                record.target(),
                record.level(),
                message
            ))
        })
        .level(log::LevelFilter::Debug)
        .chain(std::io::stdout())
        .apply();

    let (store, options) = data;
    let roster_size = store.roster().len();
    let best = rank(&store, roster_size, options);

    assert!(best.len() <= options.limit, "More candidates than the limit");
    assert!(
        best.iter().all(|c| c.count >= options.minimum_overlap),
        "Candidate below the minimum overlap"
    );
    assert!(
        best.iter()
            .tuple_windows()
            .all(|(a, b)| a.count > b.count || (a.count == b.count && a.cell < b.cell)),
        "Candidates out of order"
    );
    assert!(
        best.iter()
            .all(|c| c.is_full_overlap() == (c.count == roster_size)),
        "Full overlap flag disagrees with the roster size"
    );
});
