//! Global CSS styles for FitForge.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* SURFACES */
  --surface: #0f172a;
  --surface-raised: #1e293b;
  --surface-border: #334155;

  /* BRAND */
  --accent: #f97316;
  --accent-glow: rgba(249, 115, 22, 0.35);

  /* TEXT */
  --text-primary: #f8fafc;
  --text-secondary: #cbd5e1;
  --text-muted: #94a3b8;

  /* TREND */
  --trend-up: #22c55e;
  --trend-down: #ef4444;

  /* DIFFICULTY */
  --difficulty-easy: #22c55e;
  --difficulty-medium: #eab308;
  --difficulty-hard: #ef4444;

  /* Typography */
  --font-sans: 'Inter', 'Segoe UI', system-ui, sans-serif;
  --text-xs: 0.75rem;
  --text-sm: 0.875rem;
  --text-base: 1rem;
  --text-xl: 1.5rem;
  --text-2xl: 2rem;

  /* Shape */
  --radius: 0.75rem;
  --transition-fast: 150ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

body {
  background: var(--surface);
  color: var(--text-primary);
  font-family: var(--font-sans);
  line-height: 1.5;
}

/* === Layout === */
.dashboard,
.feature-pending {
  max-width: 1100px;
  margin: 0 auto;
  padding: 2rem 1.5rem;
  display: flex;
  flex-direction: column;
  gap: 2rem;
}

.page-title {
  font-size: var(--text-2xl);
  font-weight: 700;
}

.tagline,
.body-text {
  color: var(--text-secondary);
}

.section-header {
  font-size: var(--text-xl);
  font-weight: 600;
  margin-bottom: 1rem;
}

.empty-state {
  color: var(--text-muted);
  font-size: var(--text-sm);
}

/* === Buttons === */
.btn-feature,
.btn-ghost {
  font: inherit;
  cursor: pointer;
  border-radius: var(--radius);
  transition: transform var(--transition-fast), box-shadow var(--transition-fast);
}

.btn-feature {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 0.5rem;
  padding: 1.25rem 1rem;
  background: var(--surface-raised);
  color: var(--text-primary);
  border: 1px solid var(--surface-border);
}

.btn-feature:hover {
  transform: translateY(-2px);
  border-color: var(--accent);
  box-shadow: 0 0 16px var(--accent-glow);
}

.btn-ghost {
  align-self: flex-start;
  background: transparent;
  color: var(--text-secondary);
  border: 1px solid var(--surface-border);
  padding: 0.5rem 1rem;
  text-decoration: none;
}

/* === Navigation Buttons === */
.quick-actions__grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(180px, 1fr));
  gap: 1rem;
}

.nav-button__icon {
  color: var(--accent);
}

.nav-button__label {
  font-weight: 600;
}

/* === Stats Card === */
.stats-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
  gap: 1rem;
}

.stats-card {
  display: flex;
  justify-content: space-between;
  align-items: flex-start;
  padding: 1.25rem;
  background: var(--surface-raised);
  border: 1px solid var(--surface-border);
  border-radius: var(--radius);
}

.stats-card__title {
  color: var(--text-muted);
  font-size: var(--text-sm);
}

.stats-card__value {
  font-size: var(--text-xl);
  font-weight: 700;
}

.stats-card__trend {
  font-size: var(--text-xs);
  font-weight: 600;
}

.stats-card__trend--up {
  color: var(--trend-up);
}

.stats-card__trend--down {
  color: var(--trend-down);
}

.stats-card__icon {
  color: var(--accent);
}

/* === Workout Card === */
.workout-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(260px, 1fr));
  gap: 1.25rem;
}

.workout-card {
  overflow: hidden;
  background: var(--surface-raised);
  border: 1px solid var(--surface-border);
  border-radius: var(--radius);
}

.workout-card--interactive {
  cursor: pointer;
  transition: transform var(--transition-fast);
}

.workout-card--interactive:hover {
  transform: translateY(-2px);
}

.workout-card__media {
  position: relative;
  height: 160px;
}

.workout-card__image {
  width: 100%;
  height: 100%;
  object-fit: cover;
}

.workout-card__duration {
  position: absolute;
  left: 0.75rem;
  bottom: 0.75rem;
  display: inline-flex;
  align-items: center;
  gap: 0.25rem;
  padding: 0.2rem 0.5rem;
  background: rgba(15, 23, 42, 0.8);
  border-radius: 999px;
  font-size: var(--text-xs);
}

.workout-card__content {
  padding: 1rem;
}

.workout-card__title {
  font-size: var(--text-base);
  font-weight: 600;
}

.workout-card__subtitle {
  color: var(--text-muted);
  font-size: var(--text-sm);
}

/* === Difficulty Badge === */
.difficulty-badge {
  position: absolute;
  top: 0.75rem;
  right: 0.75rem;
  padding: 0.2rem 0.6rem;
  border-radius: 999px;
  font-size: var(--text-xs);
  font-weight: 600;
  color: var(--surface);
}

.difficulty-badge--easy {
  background: var(--difficulty-easy);
}

.difficulty-badge--medium {
  background: var(--difficulty-medium);
}

.difficulty-badge--hard {
  background: var(--difficulty-hard);
}

/* === Feature Pending === */
.feature-pending__path {
  color: var(--accent);
}
"#;
