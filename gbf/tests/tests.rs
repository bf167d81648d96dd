#[cfg(test)]
mod tests {
    use std::time::Instant;

    use float_cmp::approx_eq;
    use gbf::config::GBFConfig;
    use gbf::io::ingest;
    use gbf::io::output::export_solution;
    use gbf::opt::GBFOptimizer;
    use glasscut::entities::{MaterialSummary, Piece, Sheet};
    use glasscut::io::export::export_material;
    use glasscut::io::ext_repr::{ExtDemand, ExtMaterialDemand, ExtPiece};
    use glasscut::util::assertions;
    use glasscut::{CutError, fsize};
    use test_case::test_case;

    fn demand(lines: &[(fsize, fsize, usize)]) -> Vec<Piece> {
        lines
            .iter()
            .map(|&(w, h, q)| Piece::try_new(w, h, q).unwrap())
            .collect()
    }

    /// A mixed bag of sizes, large enough to need several sheets
    fn mixed_demand() -> Vec<Piece> {
        (0..40)
            .map(|i| {
                let w = 200.0 + ((i * 137) % 1500) as fsize;
                let h = 150.0 + ((i * 251) % 1100) as fsize;
                Piece::try_new(w, h, 1 + i % 3).unwrap()
            })
            .collect()
    }

    fn optimizer(allow_rotation: bool) -> GBFOptimizer {
        let config = GBFConfig {
            allow_rotation,
            ..GBFConfig::default()
        };
        GBFOptimizer::new(config).unwrap()
    }

    fn check_sheets(sheets: &[Sheet], demand: &[Piece]) {
        for sheet in sheets {
            assert!(!sheet.is_empty());
            assert!(assertions::sheet_is_feasible(sheet));
            assert!(assertions::free_space_covers_unused_area(sheet, 64));
            for pp in &sheet.placed_pieces {
                let (fp_w, fp_h) = pp.footprint();
                assert!(pp.x >= 0.0 && pp.y >= 0.0);
                assert!(pp.x + fp_w <= sheet.width());
                assert!(pp.y + fp_h <= sheet.height());
                if pp.width == pp.height {
                    assert!(!pp.rotated());
                }
            }
            let stats = sheet.stats();
            assert!(stats.efficiency > 0.0 && stats.efficiency <= 100.0);
            assert!(approx_eq!(
                fsize,
                stats.efficiency,
                stats.used_area / stats.total_area * 100.0,
                epsilon = 0.01
            ));
        }
        let n_placed: usize = sheets.iter().map(|s| s.placed_pieces.len()).sum();
        let n_demanded: usize = demand.iter().map(|p| p.quantity).sum();
        assert_eq!(n_placed, n_demanded);
    }

    #[test_case(&[(800.0, 1200.0, 2), (500.0, 500.0, 3), (1000.0, 600.0, 1)], 1, 38.11; "mixed demand")]
    #[test_case(&[(500.0, 500.0, 1)], 1, 2.91; "single square")]
    #[test_case(&[(3300.0, 2600.0, 1)], 1, 100.0; "exact sheet")]
    #[test_case(&[(2600.0, 3300.0, 1)], 1, 100.0; "exact sheet turned")]
    #[test_case(&[(3300.0, 1300.0, 4)], 2, 100.0; "two full sheets")]
    #[test_case(&[], 0, 0.0; "empty demand")]
    fn scenario(lines: &[(fsize, fsize, usize)], n_sheets: usize, efficiency: fsize) {
        let demand = demand(lines);
        let sheets = optimizer(true).optimize("CL6", &demand).unwrap();
        check_sheets(&sheets, &demand);

        let summary = MaterialSummary::from_sheets(&sheets);
        assert_eq!(summary.sheet_count, n_sheets);
        assert!(approx_eq!(fsize, summary.efficiency, efficiency, epsilon = 1e-9));
    }

    #[test]
    fn mixed_layout_is_exact() {
        let demand = demand(&[(800.0, 1200.0, 2), (500.0, 500.0, 3), (1000.0, 600.0, 1)]);
        let sheets = optimizer(true).optimize("CL6", &demand).unwrap();
        let positions = sheets[0]
            .placed_pieces
            .iter()
            .map(|pp| (pp.demand_id, pp.x, pp.y, pp.rotated()))
            .collect::<Vec<_>>();
        assert_eq!(
            positions,
            vec![
                (0, 0.0, 0.0, false),
                (0, 0.0, 1200.0, false),
                (2, 800.0, 0.0, false),
                (1, 800.0, 600.0, false),
                (1, 800.0, 1100.0, false),
                (1, 800.0, 1600.0, false),
            ]
        );
    }

    #[test]
    fn mixed_demand_satisfies_all_invariants() {
        let demand = mixed_demand();
        for allow_rotation in [true, false] {
            let sheets = optimizer(allow_rotation).optimize("CL3", &demand).unwrap();
            assert!(sheets.len() > 1);
            check_sheets(&sheets, &demand);
            if !allow_rotation {
                assert!(sheets.iter().flat_map(|s| &s.placed_pieces).all(|pp| !pp.rotated()));
            }
        }
    }

    #[test]
    fn optimization_is_deterministic() {
        let demand = mixed_demand();
        let optimizer = optimizer(true);
        let first = optimizer.optimize("CL6", &demand).unwrap();
        let second = optimizer.optimize("CL6", &demand).unwrap();
        assert_eq!(export_material("CL6", &first), export_material("CL6", &second));
    }

    #[test]
    fn unfittable_piece_fails_before_packing() {
        let demand = demand(&[(800.0, 1200.0, 2), (4000.0, 100.0, 1), (5000.0, 100.0, 1)]);
        assert_eq!(
            optimizer(true).optimize("CL6", &demand).unwrap_err(),
            CutError::UnfittablePiece {
                index: 1,
                width: 4000.0,
                height: 100.0
            }
        );
    }

    #[test]
    fn rotation_can_be_disabled() {
        let demand = demand(&[(1000.0, 3000.0, 1)]);
        let sheets = optimizer(true).optimize("CL6", &demand).unwrap();
        assert!(sheets[0].placed_pieces[0].rotated());

        assert!(matches!(
            optimizer(false).optimize("CL6", &demand),
            Err(CutError::UnfittablePiece { index: 0, .. })
        ));
    }

    #[test]
    fn materials_fail_independently() {
        let material = |code: &str, width, height| ExtMaterialDemand {
            code: code.into(),
            pieces: vec![ExtPiece {
                width,
                height,
                quantity: 2,
            }],
        };
        let demand = ExtDemand {
            materials: vec![
                material("CL6", 1000.0, 1000.0),
                material("XX9", 1000.0, 1000.0),
                material("CL3", 3000.0, 3000.0),
                material("CL10", 1000.0, 1000.0),
            ],
        };
        let outcomes = optimizer(true).optimize_all(&demand);
        assert_eq!(
            outcomes.iter().map(|o| o.code.as_str()).collect::<Vec<_>>(),
            vec!["CL6", "XX9", "CL3", "CL10"]
        );
        assert!(outcomes[0].result.is_ok());
        assert_eq!(
            outcomes[1].result.as_ref().unwrap_err(),
            &CutError::UnknownMaterial("XX9".into())
        );
        assert!(matches!(
            outcomes[2].result,
            Err(CutError::UnfittablePiece { .. })
        ));

        let solution = export_solution(&outcomes, Instant::now());
        assert_eq!(solution.materials.len(), 2);
        assert_eq!(solution.failures.len(), 2);
        assert_eq!(solution.materials[1].code, "CL10");
        assert_eq!(solution.materials[1].summary.total_pieces, 2);
    }

    #[test]
    fn production_rows_to_cutting_plan() {
        let csv = "\
ITEM,Esp,Largo,Ancho,Pzs.
CC06T,6,1167,2180,17
CC06T,6,1178,1167,18
CMTB6T,,800,600,4
CC10T,10,3700,100,1
";
        let rows = ingest::read_rows(csv.as_bytes()).unwrap();
        let demand = ingest::aggregate_rows(&rows);
        let outcomes = optimizer(true).optimize_all(&demand);

        let cl6 = outcomes.iter().find(|o| o.code == "CL6").unwrap();
        let sheets = cl6.result.as_ref().unwrap();
        let summary = MaterialSummary::from_sheets(sheets);
        assert_eq!(summary.piece_count, 17 + 18 + 4);

        // 3700 mm does not fit a 3600 x 2600 sheet in either orientation
        let cl10 = outcomes.iter().find(|o| o.code == "CL10").unwrap();
        assert!(cl10.result.is_err());
    }
}
