//! Integration tests for fleet-output.

#[cfg(test)]
mod csv_tests {
    use fleet_agent::AgentState;
    use tempfile::TempDir;

    use crate::csv::{CsvWriter, SNAPSHOT_HEADER, SUMMARY_HEADER};
    use crate::row::{AgentSnapshotRow, TickSummaryRow};
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn snap_row(agent_id: u32, tick: u64) -> AgentSnapshotRow {
        AgentSnapshotRow {
            agent_id,
            tick,
            x:                 agent_id,
            y:                 2,
            state:             AgentState::EnRouteToReceiver,
            has_package:       true,
            path_len:          3,
            distance_traveled: 7,
        }
    }

    fn records(path: std::path::PathBuf) -> Vec<csv::StringRecord> {
        let mut rdr = csv::Reader::from_path(path).unwrap();
        rdr.records().map(|r| r.unwrap()).collect()
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("agent_snapshots.csv").exists());
        assert!(dir.path().join("tick_summaries.csv").exists());
    }

    #[test]
    fn csv_creates_missing_dir() {
        let dir = tmp();
        let nested = dir.path().join("runs").join("a");
        let _w = CsvWriter::new(&nested).unwrap();
        assert!(nested.join("tick_summaries.csv").exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("agent_snapshots.csv")).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers, SNAPSHOT_HEADER);

        let mut rdr2 = csv::Reader::from_path(dir.path().join("tick_summaries.csv")).unwrap();
        let headers2: Vec<_> = rdr2.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers2, SUMMARY_HEADER);
    }

    #[test]
    fn csv_snapshot_rows() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_snapshots(&[snap_row(0, 5), snap_row(1, 5)]).unwrap();
        w.finish().unwrap();

        let rows = records(dir.path().join("agent_snapshots.csv"));
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[1][0], "1");           // agent_id
        assert_eq!(&rows[1][1], "5");           // tick
        assert_eq!(&rows[1][2], "1");           // x
        assert_eq!(&rows[1][4], "to_receiver"); // state
        assert_eq!(&rows[1][5], "1");           // has_package
    }

    #[test]
    fn csv_tick_summary_row() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_tick_summary(&TickSummaryRow {
            tick:                 3,
            completed_deliveries: 2,
            total_distance:       17,
            pending_deliveries:   1,
            active_agents:        1,
            routing_failures:     0,
            utilization_pct:      100.0 / 3.0,
        })
        .unwrap();
        w.finish().unwrap();

        let rows = records(dir.path().join("tick_summaries.csv"));
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][0], "3");
        assert_eq!(&rows[0][2], "17");
        assert_eq!(&rows[0][6], "33.3");
    }

    #[test]
    fn csv_finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }

    #[test]
    fn csv_empty_snapshot_ok() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_snapshots(&[]).unwrap();
    }
}

// ── Observer ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod observer_tests {
    use std::io;

    use fleet_core::{Cell, SimConfig, Tick};
    use fleet_sim::{FleetStats, SimBuilder, SimObserver};
    use tempfile::TempDir;

    use crate::csv::CsvWriter;
    use crate::observer::SimOutputObserver;
    use crate::row::{AgentSnapshotRow, TickSummaryRow};
    use crate::writer::OutputWriter;
    use crate::{OutputError, OutputResult};

    /// Fails every write with a numbered error.
    struct Failing {
        calls: u32,
    }

    impl Failing {
        fn fail(&mut self) -> OutputResult<()> {
            self.calls += 1;
            Err(OutputError::Io(io::Error::other(format!("failure {}", self.calls))))
        }
    }

    impl OutputWriter for Failing {
        fn write_snapshots(&mut self, _rows: &[AgentSnapshotRow]) -> OutputResult<()> {
            self.fail()
        }
        fn write_tick_summary(&mut self, _row: &TickSummaryRow) -> OutputResult<()> {
            self.fail()
        }
        fn finish(&mut self) -> OutputResult<()> {
            self.fail()
        }
    }

    #[test]
    fn keeps_first_error() {
        let mut obs = SimOutputObserver::new(Failing { calls: 0 });
        obs.on_tick_end(Tick(0), &FleetStats::default());
        obs.on_tick_end(Tick(1), &FleetStats::default());
        obs.on_sim_end(Tick(2), &FleetStats::default());

        let err = obs.take_error().unwrap();
        assert!(err.to_string().contains("failure 1"), "got {err}");
        assert!(obs.take_error().is_none());
        assert_eq!(obs.into_writer().calls, 3);
    }

    #[test]
    fn integration_csv() {
        let config = SimConfig {
            width:                   5,
            height:                  5,
            num_agents:              2,
            num_senders:             1,
            num_receivers:           1,
            seed:                    1,
            start:                   Some(Cell::new(2, 2)),
            occupy_depot:            false,
            total_ticks:             8,
            snapshot_interval_ticks: 2,
        };
        let mut sim = SimBuilder::new(config)
            .sender_positions(vec![Cell::new(0, 0)])
            .receiver_positions(vec![Cell::new(4, 4)])
            .build()
            .unwrap();

        let dir: TempDir = tempfile::tempdir().unwrap();
        let mut obs = SimOutputObserver::new(CsvWriter::new(dir.path()).unwrap());
        sim.run(&mut obs).unwrap();
        assert!(obs.take_error().is_none(), "no write errors expected");

        // interval 2 → snapshots at ticks 0, 2, 4, 6 (4 ticks × 2 agents)
        let mut rdr = csv::Reader::from_path(dir.path().join("agent_snapshots.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 8);
        assert_eq!(&rows[0][4], "to_sender");
        assert_eq!(&rows[1][4], "idle");

        let mut rdr = csv::Reader::from_path(dir.path().join("tick_summaries.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 8);
        assert_eq!(&rows[7][0], "7");
        assert_eq!(&rows[0][3], "1", "one delivery in flight after tick 0");
    }
}
