//! Demo data for a fresh store: three profiles, four postulations across the
//! status lifecycle and six notifications. Either every step lands or none.

use sqlx::PgPool;
use tracing::{error, info, warn};

use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy)]
pub struct SeedStep {
    pub label: &'static str,
    pub sql: &'static str,
}

pub const STEPS: &[SeedStep] = &[
    SeedStep {
        label: "perfiles (Juan)",
        sql: r#"
            INSERT INTO public.perfiles (user_id, user_email, nombres, apellidos, carrera, ciclo_actual)
            VALUES (1, 'juan.perez@uni.edu.pe', 'Juan Carlos', 'Pérez López', 'Ingeniería de Sistemas', 8)
        "#,
    },
    SeedStep {
        label: "perfiles (María)",
        sql: r#"
            INSERT INTO public.perfiles (
                user_id, user_email, nombres, apellidos, telefono, fecha_nacimiento, carrera, ciclo_actual, anio_egreso,
                promedio_ponderado, departamento, provincia, distrito, linkedin_url, github_url, portfolio_url,
                cv_url, cv_filename, cv_uploaded_at, sobre_mi, habilidades_tecnicas, habilidades_blandas, intereses,
                experiencia_laboral, proyectos, idiomas, educacion_adicional, modalidad_preferida, disponibilidad,
                expectativa_salarial_min, expectativa_salarial_max, perfil_publico, busca_empleo, disponible_inmediato
            ) VALUES (
                2, 'maria.garcia@uni.edu.pe', 'María', 'García Torres', '+51 987654321', '2001-05-15', 'Ingeniería Industrial', 10, 2024, 9.80,
                'Lima', 'Lima', 'San Isidro', 'https://linkedin.com/in/mariagarcia', 'https://github.com/mariagarcia', 'https://mariagarcia.dev',
                'https://res.cloudinary.com/leaduni/raw/upload/v1234567890/leaduni/cvs/cv_2_1234567890.pdf', 'CV_Maria_Garcia.pdf', NOW(),
                'Estudiante de últimos ciclos apasionada por la optimización de procesos y el análisis de datos. Busco oportunidades para aplicar mis conocimientos en proyectos reales.',
                'Python, SQL, Power BI, Excel Avanzado, Minitab, Arena Simulation',
                'Liderazgo, Trabajo en equipo, Resolución de problemas, Comunicación efectiva',
                'Análisis de datos, Mejora continua, Lean Six Sigma, Supply Chain',
                '[{"empresa":"Alicorp S.A.","cargo":"Practicante de Mejora Continua","descripcion":"Implementación de metodología Lean en líneas de producción, reduciendo tiempos de cambio en 25%","fecha_inicio":"2023-03","fecha_fin":"2023-12","actualmente":false},{"empresa":"Backus","cargo":"Practicante de Planeamiento","descripcion":"Análisis de demanda y optimización de inventarios usando Python","fecha_inicio":"2024-01","fecha_fin":null,"actualmente":true}]'::jsonb,
                '[{"nombre":"Sistema de Gestión de Inventarios","descripcion":"Aplicación web para control de inventarios con alertas automáticas de stock bajo","url":"https://inventory-system.vercel.app","repositorio":"https://github.com/mariagarcia/inventory-system","tecnologias":"React, Node.js, PostgreSQL, Chart.js","fecha":"2024-02"},{"nombre":"Dashboard de Indicadores KPI","descripcion":"Dashboard interactivo para visualización de KPIs operacionales en tiempo real","url":null,"repositorio":"https://github.com/mariagarcia/kpi-dashboard","tecnologias":"Python, Dash, Plotly, Pandas","fecha":"2023-11"}]'::jsonb,
                '[{"idioma":"Español","nivel":"nativo","certificacion":null},{"idioma":"Inglés","nivel":"avanzado","certificacion":"TOEFL ITP 580"},{"idioma":"Portugués","nivel":"basico","certificacion":null}]'::jsonb,
                '[{"tipo":"certificacion","institucion":"Coursera - Google","titulo":"Google Data Analytics Professional Certificate","fecha":"2023-08"},{"tipo":"curso","institucion":"LinkedIn Learning","titulo":"Lean Six Sigma Yellow Belt","fecha":"2023-05"}]'::jsonb,
                'hibrido', 'Inmediata, 40 horas semanales', 2000.00, 2500.00, true, true, true
            )
        "#,
    },
    SeedStep {
        label: "perfiles (Carlos)",
        sql: r#"
            INSERT INTO public.perfiles (
                user_id, user_email, nombres, apellidos, telefono, carrera, anio_egreso, departamento, distrito, linkedin_url,
                github_url, cv_url, sobre_mi, habilidades_tecnicas, experiencia_laboral, proyectos, idiomas, modalidad_preferida,
                expectativa_salarial_min, busca_empleo, disponible_inmediato
            ) VALUES (
                3, 'carlos.rodriguez@uni.edu.pe', 'Carlos', 'Rodríguez Mendoza', '+51 912345678', 'Ingeniería Mecánica', 2023, 'Lima', 'Surco',
                'https://linkedin.com/in/carlosrodriguez', 'https://github.com/carlosr', 'https://res.cloudinary.com/leaduni/raw/upload/v1234567890/leaduni/cvs/cv_3_1234567890.pdf',
                'Ingeniero Mecánico con 1 año de experiencia en diseño y simulación. Especializado en SolidWorks y análisis FEA.',
                'SolidWorks, AutoCAD, ANSYS, MATLAB, Python',
                '[{"empresa":"Ferreyros S.A.","cargo":"Ingeniero de Diseño Junior","descripcion":"Diseño de componentes mecánicos y análisis de esfuerzos","fecha_inicio":"2023-02","fecha_fin":null,"actualmente":true}]'::jsonb,
                '[{"nombre":"Brazo Robótico de 6 GDL","descripcion":"Diseño y simulación de brazo robótico para aplicaciones industriales","url":null,"repositorio":null,"tecnologias":"SolidWorks, MATLAB, Arduino","fecha":"2022-12"}]'::jsonb,
                '[{"idioma":"Español","nivel":"nativo","certificacion":null},{"idioma":"Inglés","nivel":"intermedio","certificacion":null}]'::jsonb,
                'presencial', 3000.00, false, false
            )
        "#,
    },
    SeedStep {
        label: "postulaciones (oferta 101)",
        sql: r#"
            INSERT INTO public.postulaciones (
                oferta_id, oferta_titulo, oferta_slug, empresa_id, empresa_nombre, perfil_id, user_email, carta_presentacion, cv_url,
                estado, empresa_contacto_email, ip_address
            ) VALUES (
                101, 'Practicante de Desarrollo Backend', 'practicante-desarrollo-backend', 1, 'TechCorp Perú',
                (SELECT id FROM public.perfiles WHERE user_id = 1), 'juan.perez@uni.edu.pe',
                'Estimado equipo de TechCorp,

Me dirijo a ustedes con gran entusiasmo para postular al puesto de Practicante de Desarrollo Backend...

Atentamente,
Juan Carlos Pérez',
                'https://res.cloudinary.com/leaduni/raw/upload/v1234567890/leaduni/cvs/cv_1_1234567890.pdf', 'enviada', 'rrhh@techcorp.com', '192.168.1.100'
            )
        "#,
    },
    SeedStep {
        label: "postulaciones (oferta 102)",
        sql: r#"
            INSERT INTO public.postulaciones (
                oferta_id, oferta_titulo, oferta_slug, empresa_id, empresa_nombre, empresa_logo_url, perfil_id, user_email,
                carta_presentacion, cv_url, estado, notas_internas, historial_estados, email_enviado, fecha_email_enviado,
                empresa_contacto_email
            ) VALUES (
                102, 'Analista de Mejora Continua', 'analista-mejora-continua', 2, 'Alicorp S.A.',
                'https://res.cloudinary.com/leaduni/image/upload/v1234567890/leaduni/logos/alicorp.png',
                (SELECT id FROM public.perfiles WHERE user_id = 2), 'maria.garcia@uni.edu.pe',
                'Estimados,

Con gran interés me postulo al puesto de Analista de Mejora Continua...',
                'https://res.cloudinary.com/leaduni/raw/upload/v1234567890/leaduni/cvs/cv_2_1234567890.pdf', 'en_revision',
                'Perfil muy interesante, experiencia previa en la empresa es un plus',
                '[{"estado":"enviada","fecha":"2024-01-15T10:30:00Z","nota":"Postulación recibida"},{"estado":"en_revision","fecha":"2024-01-16T14:20:00Z","nota":"Perfil muy interesante, experiencia previa en la empresa es un plus"}]'::jsonb,
                true, '2024-01-15 10:35:00', 'seleccion@alicorp.com.pe'
            )
        "#,
    },
    SeedStep {
        label: "postulaciones (oferta 103)",
        sql: r#"
            INSERT INTO public.postulaciones (
                oferta_id, oferta_titulo, oferta_slug, empresa_id, empresa_nombre, perfil_id, user_email, carta_presentacion, cv_url,
                respuestas_adicionales, estado, historial_estados, email_enviado, empresa_contacto_email
            ) VALUES (
                103, 'Ingeniero de Diseño Mecánico Junior', 'ingeniero-diseno-mecanico-junior', 3, 'Ferreyros S.A.',
                (SELECT id FROM public.perfiles WHERE user_id = 3), 'carlos.rodriguez@uni.edu.pe',
                'Estimado equipo de Ferreyros,

Me complace postular al puesto de Ingeniero de Diseño Mecánico Junior...',
                'https://res.cloudinary.com/leaduni/raw/upload/v1234567890/leaduni/cvs/cv_3_1234567890.pdf',
                '[{"pregunta":"¿Cuántos años de experiencia tienes con SolidWorks?","respuesta":"Tengo 2 años..."},{"pregunta":"¿Estás disponible para trabajar en campo?","respuesta":"Sí, estoy completamente disponible..."}]'::jsonb,
                'entrevista_programada',
                '[{"estado":"enviada","fecha":"2024-01-10T09:00:00Z","nota":"Postulación recibida"},{"estado":"en_revision","fecha":"2024-01-11T11:00:00Z","nota":"Candidato con experiencia previa en la empresa"},{"estado":"entrevista_programada","fecha":"2024-01-12T16:00:00Z","nota":"Entrevista programada para el 20/01/2024 a las 10:00 AM"}]'::jsonb,
                true, 'reclutamiento@ferreyros.com.pe'
            )
        "#,
    },
    SeedStep {
        label: "postulaciones (oferta 104)",
        sql: r#"
            INSERT INTO public.postulaciones (
                oferta_id, oferta_titulo, oferta_slug, empresa_id, empresa_nombre, perfil_id, user_email, carta_presentacion, cv_url,
                estado, notas_internas, historial_estados, email_enviado
            ) VALUES (
                104, 'Desarrollador Full Stack Senior', 'desarrollador-fullstack-senior', 4, 'StartupTech',
                (SELECT id FROM public.perfiles WHERE user_id = 1), 'juan.perez@uni.edu.pe',
                'Estimado equipo,

Me interesa el puesto de Desarrollador Full Stack Senior...',
                'https://res.cloudinary.com/leaduni/raw/upload/v1234567890/leaduni/cvs/cv_1_1234567890.pdf', 'rechazada',
                'Perfil junior, el puesto requiere 3+ años de experiencia',
                '[{"estado":"enviada","fecha":"2024-01-08T14:00:00Z","nota":"Postulación recibida"},{"estado":"en_revision","fecha":"2024-01-09T10:00:00Z","nota":"Revisando perfil"},{"estado":"rechazada","fecha":"2024-01-09T15:00:00Z","nota":"Perfil junior, el puesto requiere 3+ años de experiencia"}]'::jsonb,
                true
            )
        "#,
    },
    SeedStep {
        label: "notificaciones (postulación enviada)",
        sql: r#"
            INSERT INTO public.notificaciones (
                perfil_id, user_email, tipo, titulo, mensaje, url, accion_principal, entidad_tipo, entidad_id, metadata, prioridad
            ) VALUES (
                (SELECT id FROM public.perfiles WHERE user_id = 1), 'juan.perez@uni.edu.pe', 'postulacion_enviada', '✅ Postulación enviada exitosamente',
                'Tu postulación a "Practicante de Desarrollo Backend" en TechCorp Perú ha sido enviada correctamente. Te notificaremos cuando haya novedades.',
                '/mis-postulaciones', 'Ver postulación', 'postulacion', 101, '{"oferta_titulo":"Practicante de Desarrollo Backend","empresa":"TechCorp Perú"}'::jsonb, 'normal'
            )
        "#,
    },
    SeedStep {
        label: "notificaciones (en revisión)",
        sql: r#"
            INSERT INTO public.notificaciones (
                perfil_id, user_email, tipo, titulo, mensaje, url, accion_principal, entidad_tipo, entidad_id, metadata, prioridad, leida
            ) VALUES (
                (SELECT id FROM public.perfiles WHERE user_id = 2), 'maria.garcia@uni.edu.pe', 'cambio_estado_postulacion', '🎉 Tu postulación está en revisión',
                'Alicorp S.A. está revisando tu postulación para "Analista de Mejora Continua". ¡Mantente atento a tu correo!',
                '/mis-postulaciones', 'Ver detalles', 'postulacion', 102, '{"oferta_titulo":"Analista de Mejora Continua","empresa":"Alicorp S.A.","estado_anterior":"enviada","estado_nuevo":"en_revision"}'::jsonb,
                'alta', false
            )
        "#,
    },
    SeedStep {
        label: "notificaciones (entrevista)",
        sql: r#"
            INSERT INTO public.notificaciones (
                perfil_id, user_email, tipo, titulo, mensaje, url, accion_principal, accion_secundaria, entidad_tipo, entidad_id, metadata, prioridad
            ) VALUES (
                (SELECT id FROM public.perfiles WHERE user_id = 3), 'carlos.rodriguez@uni.edu.pe', 'cambio_estado_postulacion', '📅 ¡Entrevista programada!',
                'Ferreyros S.A. ha programado una entrevista contigo para el puesto de "Ingeniero de Diseño Mecánico Junior" el día 20/01/2024 a las 10:00 AM.',
                '/mis-postulaciones', 'Ver detalles', 'Agregar a calendario', 'postulacion', 103, '{"oferta_titulo":"Ingeniero de Diseño Mecánico Junior","empresa":"Ferreyros S.A.","fecha_entrevista":"2024-01-20T10:00:00Z","modalidad":"presencial","direccion":"Av. Cristóbal de Peralta Norte 820, Surco"}'::jsonb,
                'urgente'
            )
        "#,
    },
    SeedStep {
        label: "notificaciones (perfil incompleto)",
        sql: r#"
            INSERT INTO public.notificaciones (
                perfil_id, user_email, tipo, titulo, mensaje, url, accion_principal, metadata, prioridad
            ) VALUES (
                (SELECT id FROM public.perfiles WHERE user_id = 1), 'juan.perez@uni.edu.pe', 'perfil_incompleto', '⚠️ Completa tu perfil',
                'Tu perfil está al 45%. Complétalo para tener más oportunidades de ser contactado por empresas. Agrega tu CV, experiencia y proyectos.',
                '/perfil/editar', 'Completar perfil', '{"porcentaje_actual":45,"campos_faltantes":["cv_url","experiencia_laboral","proyectos"]}'::jsonb, 'baja'
            )
        "#,
    },
    SeedStep {
        label: "notificaciones (curso sugerido)",
        sql: r#"
            INSERT INTO public.notificaciones (
                perfil_id, user_email, tipo, titulo, mensaje, url, accion_principal, entidad_tipo, entidad_id, metadata, prioridad
            ) VALUES (
                (SELECT id FROM public.perfiles WHERE user_id = 1), 'juan.perez@uni.edu.pe', 'curso_sugerido', '📚 Curso recomendado para ti',
                'Basándonos en las ofertas que te interesan, te recomendamos el curso "Python para Data Science" de Coursera. ¡Es gratis!',
                '/capacitate', 'Ver curso', 'curso', 15, '{"curso_titulo":"Python para Data Science","proveedor":"Coursera","es_gratuito":true,"duracion":"40 horas"}'::jsonb, 'normal'
            )
        "#,
    },
    SeedStep {
        label: "notificaciones (bienvenida)",
        sql: r#"
            INSERT INTO public.notificaciones (
                perfil_id, user_email, tipo, titulo, mensaje, url, leida, fecha_lectura, prioridad
            ) VALUES (
                (SELECT id FROM public.perfiles WHERE user_id = 2), 'maria.garcia@uni.edu.pe', 'sistema', '🎉 ¡Bienvenida a Bolsa Laboral LeadUNI!',
                'Gracias por registrarte. Completa tu perfil para empezar a postular a ofertas laborales.',
                '/perfil/editar', true, NOW() - INTERVAL '2 days', 'normal'
            )
        "#,
    },
];

#[derive(Clone)]
pub struct SeedService {
    pool: PgPool,
}

impl SeedService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn run(&self) -> Result<()> {
        self.run_steps(STEPS).await
    }

    /// Executes `steps` in order inside one transaction. The first failure
    /// rolls everything back and is reported with the step's label.
    pub async fn run_steps(&self, steps: &[SeedStep]) -> Result<()> {
        let mut tx = self.pool.begin().await?;

        for step in steps {
            if let Err(e) = sqlx::query(step.sql).execute(&mut *tx).await {
                warn!(step = step.label, error = %e, "seed step failed, rolling back");
                if let Err(rollback_err) = tx.rollback().await {
                    error!(error = %rollback_err, "seed rollback failed");
                }
                return Err(Error::Seed(format!("{}: {}", step.label, e)));
            }
        }

        tx.commit().await?;
        info!(steps = steps.len(), "seed committed");
        Ok(())
    }
}
