//! Verwaltung der Kurvenliste: Anlegen, Löschen, aktuelle Auswahl.
//!
//! Backend-Gegenstück zum Listen-Widget des Editors: Kurven werden
//! fortlaufend `curve {n}` benannt und nach dem Löschen reindiziert,
//! damit Listen-Index und Kurvenname deckungsgleich bleiben.

use super::Curve;

/// Geordnete Kurvenliste mit optionaler aktueller Auswahl.
#[derive(Debug, Clone, Default)]
pub struct CurveSet {
    curves: Vec<Curve>,
    current: Option<usize>,
}

impl CurveSet {
    /// Erstellt eine leere Kurvenliste.
    pub fn new() -> Self {
        Self::default()
    }

    /// Anzahl der Kurven.
    pub fn len(&self) -> usize {
        self.curves.len()
    }

    /// `true` wenn keine Kurve existiert.
    pub fn is_empty(&self) -> bool {
        self.curves.is_empty()
    }

    /// Alle Kurven in Listen-Reihenfolge.
    pub fn curves(&self) -> &[Curve] {
        &self.curves
    }

    /// Legt eine neue leere Kurve an, macht sie aktuell und gibt ihren
    /// Index zurück.
    pub fn add_curve(&mut self) -> usize {
        let index = self.curves.len();
        self.curves.push(Curve::new(format!("curve {index}")));
        self.current = Some(index);
        log::debug!("Kurve 'curve {}' angelegt ({} gesamt)", index, self.curves.len());
        index
    }

    /// Hängt eine bestehende Kurve an (z.B. ein Unterteilungs-Ergebnis)
    /// und gibt ihren Index zurück. Die Auswahl bleibt unverändert.
    pub fn insert_curve(&mut self, curve: Curve) -> usize {
        let index = self.curves.len();
        log::debug!("Kurve '{}' übernommen als Index {}", curve.name(), index);
        self.curves.push(curve);
        index
    }

    /// Entfernt die Kurven an den gegebenen Indizes (Duplikate und
    /// Out-of-Range-Einträge werden ignoriert) und gibt die Anzahl der
    /// entfernten Kurven zurück.
    ///
    /// Verbleibende Kurven werden fortlaufend umbenannt. War die aktuelle
    /// Kurve betroffen, wird die Auswahl aufgehoben, sonst auf den neuen
    /// Index verschoben.
    pub fn remove_curves(&mut self, indices: &[usize]) -> usize {
        let mut sorted: Vec<usize> = indices
            .iter()
            .copied()
            .filter(|&i| i < self.curves.len())
            .collect();
        sorted.sort_unstable();
        sorted.dedup();

        self.current = match self.current {
            Some(current) if sorted.contains(&current) => None,
            Some(current) => {
                let shift = sorted.iter().filter(|&&i| i < current).count();
                Some(current - shift)
            }
            None => None,
        };

        for &index in sorted.iter().rev() {
            self.curves.remove(index);
        }
        for (index, curve) in self.curves.iter_mut().enumerate() {
            curve.set_name(format!("curve {index}"));
        }

        log::debug!("{} Kurve(n) entfernt, {} verbleiben", sorted.len(), self.curves.len());
        sorted.len()
    }

    /// Kurve an `index`, falls vorhanden.
    pub fn get(&self, index: usize) -> Option<&Curve> {
        self.curves.get(index)
    }

    /// Mutable Kurve an `index`, falls vorhanden.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Curve> {
        self.curves.get_mut(index)
    }

    /// Setzt die aktuelle Auswahl. `false` wenn der Index außerhalb liegt
    /// (Auswahl bleibt dann unverändert).
    pub fn set_current(&mut self, index: Option<usize>) -> bool {
        match index {
            Some(i) if i >= self.curves.len() => false,
            _ => {
                self.current = index;
                true
            }
        }
    }

    /// Index der aktuellen Kurve.
    pub fn current_index(&self) -> Option<usize> {
        self.current
    }

    /// Die aktuelle Kurve, falls eine ausgewählt ist.
    pub fn current(&self) -> Option<&Curve> {
        self.current.and_then(|i| self.curves.get(i))
    }

    /// Die aktuelle Kurve, mutable.
    pub fn current_mut(&mut self) -> Option<&mut Curve> {
        let index = self.current?;
        self.curves.get_mut(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_curve_benennt_fortlaufend_und_selektiert() {
        let mut set = CurveSet::new();
        assert_eq!(set.add_curve(), 0);
        assert_eq!(set.add_curve(), 1);
        assert_eq!(set.current_index(), Some(1));
        assert_eq!(set.get(0).unwrap().name(), "curve 0");
        assert_eq!(set.get(1).unwrap().name(), "curve 1");
    }

    #[test]
    fn test_remove_curves_reindiziert_namen() {
        let mut set = CurveSet::new();
        for _ in 0..4 {
            set.add_curve();
        }
        // curve 1 und curve 2 löschen — curve 3 rückt auf Index 1
        let removed = set.remove_curves(&[2, 1, 2]);
        assert_eq!(removed, 2);
        assert_eq!(set.len(), 2);
        assert_eq!(set.get(0).unwrap().name(), "curve 0");
        assert_eq!(set.get(1).unwrap().name(), "curve 1");
    }

    #[test]
    fn test_remove_curves_auswahl_verschiebt_oder_erlischt() {
        let mut set = CurveSet::new();
        for _ in 0..3 {
            set.add_curve();
        }
        set.set_current(Some(2));
        set.remove_curves(&[0]);
        assert_eq!(set.current_index(), Some(1));

        set.remove_curves(&[1]);
        assert_eq!(set.current_index(), None);
    }

    #[test]
    fn test_set_current_ausserhalb_ist_false() {
        let mut set = CurveSet::new();
        set.add_curve();
        assert!(!set.set_current(Some(5)));
        assert_eq!(set.current_index(), Some(0));
        assert!(set.set_current(None));
        assert!(set.current().is_none());
    }
}
