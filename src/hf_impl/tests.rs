//! Tests for HF energy assembly

#[cfg(test)]
mod tests {
    use super::super::EnergyAssembler;
    use crate::integrals_impl::{EriEntry, IntegralStore, OrbitalSpace};
    use nalgebra::{DMatrix, DVector};

    fn space(n_occ: usize, mo_num: usize) -> OrbitalSpace {
        OrbitalSpace::new(n_occ, mo_num, DVector::zeros(mo_num)).unwrap()
    }

    #[test]
    fn test_no_occupied_orbitals_gives_zero_energies() {
        let store = IntegralStore::new(
            DMatrix::from_row_slice(2, 2, &[-1.5, 0.0, 0.0, -0.6]),
            vec![EriEntry::new(0, 0, 0, 0, 0.8)],
        );
        let space = space(0, 2);
        let assembler = EnergyAssembler::new(&store, &space);

        assert_eq!(assembler.one_electron_energy(), 0.0);
        assert_eq!(assembler.two_electron_energy(), 0.0);
    }

    #[test]
    fn test_one_electron_energy_doubles_occupied_diagonal() {
        let store = IntegralStore::new(
            DMatrix::from_row_slice(2, 2, &[-1.5, 0.0, 0.0, -0.6]),
            Vec::new(),
        );
        let space = space(1, 2);
        let assembler = EnergyAssembler::new(&store, &space);

        assert_eq!(assembler.one_electron_energy(), -3.0);
    }

    #[test]
    fn test_all_indices_equal_added_once() {
        // The (ii|ii) self term is stored pre-folded and enters unscaled
        let store = IntegralStore::new(DMatrix::zeros(1, 1), vec![EriEntry::new(0, 0, 0, 0, 0.8)]);
        let space = space(1, 1);
        let assembler = EnergyAssembler::new(&store, &space);

        assert_eq!(assembler.two_electron_energy(), 0.8);
    }

    #[test]
    fn test_coulomb_and_exchange_classification() {
        // One entry per branch, n_occ = 2:
        //   (0 0 0 0)  self term        -> +0.9
        //   (0 1 0 1)  Coulomb (ij|ij)  -> +4 * 0.5 = +2.0
        //   (0 0 1 1)  exchange (ii|kk) -> -2 * 0.3 = -0.6
        let store = IntegralStore::new(
            DMatrix::zeros(2, 2),
            vec![
                EriEntry::new(0, 0, 0, 0, 0.9),
                EriEntry::new(0, 1, 0, 1, 0.5),
                EriEntry::new(0, 0, 1, 1, 0.3),
            ],
        );
        let space = space(2, 2);
        let assembler = EnergyAssembler::new(&store, &space);

        let expected = 0.9 + 4.0 * 0.5 - 2.0 * 0.3;
        assert!((assembler.two_electron_energy() - expected).abs() < 1e-15);
    }

    #[test]
    fn test_unclassified_occupied_entry_contributes_nothing() {
        // (0 1 1 0) has both leading indices occupied but matches none of
        // the three patterns in its stored form, so it is ignored rather
        // than rejected
        let store = IntegralStore::new(DMatrix::zeros(2, 2), vec![EriEntry::new(0, 1, 1, 0, 0.3)]);
        let space = space(2, 2);
        let assembler = EnergyAssembler::new(&store, &space);

        assert_eq!(assembler.two_electron_energy(), 0.0);
    }

    #[test]
    fn test_virtual_entries_skipped_regardless_of_list_order() {
        // A virtual-index entry placed before the occupied block must not
        // stop the scan; the filter is per entry, not an early break
        let store = IntegralStore::new(
            DMatrix::zeros(3, 3),
            vec![
                EriEntry::new(2, 2, 0, 0, 0.7),
                EriEntry::new(0, 2, 0, 2, 0.4),
                EriEntry::new(0, 0, 0, 0, 0.8),
            ],
        );
        let space = space(1, 3);
        let assembler = EnergyAssembler::new(&store, &space);

        assert_eq!(assembler.two_electron_energy(), 0.8);
    }

    #[test]
    fn test_hartree_fock_energy_sums_all_parts() {
        let store = IntegralStore::new(
            DMatrix::from_row_slice(2, 2, &[-1.5, 0.0, 0.0, -0.6]),
            vec![EriEntry::new(0, 0, 0, 0, 0.8)],
        );
        let space = space(1, 2);
        let assembler = EnergyAssembler::new(&store, &space);

        let expected = 0.5 + (-3.0) + 0.8;
        assert!((assembler.hartree_fock_energy(0.5) - expected).abs() < 1e-15);
    }

    #[test]
    fn test_energies_are_idempotent() {
        let store = IntegralStore::new(
            DMatrix::from_row_slice(2, 2, &[-1.5, 0.0, 0.0, -0.6]),
            vec![
                EriEntry::new(0, 0, 0, 0, 0.9),
                EriEntry::new(0, 1, 0, 1, 0.5),
            ],
        );
        let space = space(2, 2);
        let assembler = EnergyAssembler::new(&store, &space);

        let first = (
            assembler.one_electron_energy(),
            assembler.two_electron_energy(),
        );
        let second = (
            assembler.one_electron_energy(),
            assembler.two_electron_energy(),
        );
        assert_eq!(first, second);
    }
}
