//! Editorial collections managed in the CMS. Offers live in the `projects`
//! collection; postulations refer to them by id and slug only.

use super::schema::{Access, Collection, DefaultValue, Field, SelectOption};

pub const COMPANIES: Collection = Collection {
    slug: "companies",
    use_as_title: "nombre_comercial",
    default_columns: &["nombre_comercial", "sector", "tiene_convenio", "activo"],
    description: Some("Empresas que publican ofertas laborales"),
    access: Access::PublicRead,
    fields: &[
        Field::text("nombre_comercial")
            .required()
            .label("Nombre comercial")
            .placeholder("Ej: TechCorp Perú"),
        Field::text("razon_social")
            .label("Razón social")
            .placeholder("Ej: TechCorp S.A.C."),
        Field::text("ruc").label("RUC").unique().placeholder("20123456789"),
        Field::select(
            "sector",
            &[
                SelectOption::new("Tecnología", "tecnologia"),
                SelectOption::new("Construcción", "construccion"),
                SelectOption::new("Manufactura", "manufactura"),
                SelectOption::new("Servicios", "servicios"),
                SelectOption::new("Educación", "educacion"),
                SelectOption::new("Salud", "salud"),
                SelectOption::new("Retail", "retail"),
                SelectOption::new("Finanzas", "finanzas"),
                SelectOption::new("Consultoría", "consultoria"),
                SelectOption::new("Otro", "otro"),
            ],
        )
        .required(),
        Field::textarea("descripcion")
            .label("Descripción de la empresa")
            .placeholder("Breve descripción de la empresa, su misión y actividades principales"),
        Field::text("sitio_web")
            .label("Sitio web")
            .placeholder("https://www.empresa.com"),
        Field::upload("logo", "media")
            .label("Logo de la empresa")
            .description("Logo que aparecerá en las ofertas"),
        Field::checkbox("tiene_convenio")
            .label("¿Tiene convenio con LeadUNI/UNI?")
            .default_value(DefaultValue::Bool(false))
            .description("Las empresas con convenio aparecen destacadas"),
        Field::email("email_contacto")
            .required()
            .label("Email de contacto principal")
            .description("Email principal para recibir postulaciones"),
        Field::text("telefono_contacto")
            .label("Teléfono de contacto")
            .placeholder("+51 999 999 999"),
        Field::text("persona_contacto")
            .label("Persona de contacto")
            .placeholder("Nombre del encargado de RRHH"),
        Field::text("direccion")
            .label("Dirección")
            .placeholder("Av. Principal 123, San Isidro"),
        Field::checkbox("activo")
            .label("¿Empresa activa?")
            .default_value(DefaultValue::Bool(true))
            .description("Desactivar si ya no publica ofertas"),
        Field::slug("nombre_comercial")
            .label("Slug (URL amigable)")
            .description("Se genera automáticamente del nombre"),
    ],
};

pub const COURSES: Collection = Collection {
    slug: "courses",
    use_as_title: "titulo",
    default_columns: &["titulo", "proveedor", "esGratuito", "nivel"],
    description: None,
    access: Access::PublicRead,
    fields: &[
        Field::text("titulo").required().label("Título del curso"),
        Field::textarea("descripcion").required().label("Descripción"),
        Field::text("proveedor")
            .required()
            .label("Proveedor")
            .placeholder("UNI - OTI, Coursera, Google, etc."),
        Field::text("url").required().label("URL del curso"),
        Field::checkbox("esGratuito")
            .label("¿Es gratuito?")
            .default_value(DefaultValue::Bool(false)),
        Field::select(
            "nivel",
            &[
                SelectOption::new("Básico", "basico"),
                SelectOption::new("Intermedio", "intermedio"),
                SelectOption::new("Avanzado", "avanzado"),
            ],
        )
        .required(),
        Field::number("duracionHoras").label("Duración (horas)").min(0),
        Field::upload("imagen", "media").label("Imagen del curso"),
        Field::checkbox("destacado")
            .label("¿Destacar en homepage?")
            .default_value(DefaultValue::Bool(false)),
    ],
};

pub const OFFERS: Collection = Collection {
    slug: "projects",
    use_as_title: "titulo",
    default_columns: &["titulo", "company", "modalidad", "estado", "fecha_cierre"],
    description: Some("Ofertas laborales publicadas"),
    access: Access::PublicRead,
    fields: &[
        Field::text("titulo")
            .required()
            .label("Título del puesto")
            .placeholder("Ej: Practicante de Desarrollo Backend"),
        Field::relationship("company", "companies")
            .required()
            .label("Empresa")
            .description("Selecciona la empresa que publica esta oferta"),
        Field::rich_text("descripcion")
            .required()
            .label("Descripción del puesto")
            .description("Describe las funciones y responsabilidades principales"),
        Field::rich_text("requisitos")
            .required()
            .label("Requisitos")
            .description("Requisitos académicos y técnicos necesarios"),
        Field::textarea("skills_requeridas")
            .label("Skills requeridas (separadas por comas)")
            .placeholder("Python, SQL, React, Excel, Git")
            .description("Para sugerir cursos CAPACÍTATE relacionados"),
        Field::select(
            "nivel_experiencia",
            &[
                SelectOption::new("Sin experiencia", "sin_experiencia"),
                SelectOption::new("Menos de 1 año", "menos_1_anio"),
                SelectOption::new("1-3 años", "1_3_anios"),
                SelectOption::new("Más de 3 años", "mas_3_anios"),
            ],
        )
        .required()
        .default_value(DefaultValue::Text("sin_experiencia")),
        Field::textarea("carreras_afines")
            .label("Carreras afines (separadas por comas)")
            .placeholder("Ingeniería de Sistemas, Ingeniería Industrial, Ingeniería Mecánica"),
        Field::select(
            "modalidad",
            &[
                SelectOption::new("Presencial", "presencial"),
                SelectOption::new("Remoto", "remoto"),
                SelectOption::new("Híbrido", "hibrido"),
            ],
        )
        .required(),
        Field::group(
            "ubicacion",
            &[
                Field::text("departamento").label("Departamento").placeholder("Lima"),
                Field::text("distrito").label("Distrito").placeholder("San Isidro"),
                Field::text("direccion")
                    .label("Dirección (opcional)")
                    .placeholder("Av. Principal 123"),
            ],
        )
        .label("Ubicación")
        .description("Solo si la modalidad NO es remoto")
        .unless_equals("modalidad", "remoto"),
        Field::select(
            "tipo_contrato",
            &[
                SelectOption::new("Prácticas Pre-profesionales", "practicas_pre"),
                SelectOption::new("Prácticas Profesionales", "practicas_pro"),
                SelectOption::new("Tiempo Completo", "tiempo_completo"),
                SelectOption::new("Medio Tiempo", "medio_tiempo"),
                SelectOption::new("Por Horas", "por_horas"),
                SelectOption::new("Freelance", "freelance"),
            ],
        )
        .required(),
        Field::text("horario")
            .label("Horario")
            .placeholder("Lunes a Viernes 9am - 6pm"),
        Field::group(
            "compensacion",
            &[
                Field::number("salario_min")
                    .label("Salario mínimo (S/)")
                    .placeholder("1500"),
                Field::number("salario_max")
                    .label("Salario máximo (S/)")
                    .placeholder("2000"),
                Field::checkbox("mostrar_salario")
                    .label("¿Mostrar salario públicamente?")
                    .default_value(DefaultValue::Bool(true))
                    .description("Si está desmarcado, se mostrará \"A convenir\""),
            ],
        )
        .label("Compensación"),
        Field::textarea("beneficios")
            .label("Beneficios adicionales")
            .placeholder("EPS, bono de transporte, almuerzo, capacitaciones, etc."),
        Field::email("email_contacto")
            .label("Email de contacto (opcional)")
            .description("Si está vacío, se usará el email de la empresa"),
        Field::textarea("instrucciones_postulacion")
            .label("Instrucciones especiales para postular")
            .placeholder("Por favor incluir portfolio con 3 proyectos mínimo"),
        Field::select(
            "estado",
            &[
                SelectOption::new("Borrador", "borrador"),
                SelectOption::new("Activa", "activa"),
                SelectOption::new("Pausada", "pausada"),
                SelectOption::new("Cerrada", "cerrada"),
            ],
        )
        .required()
        .default_value(DefaultValue::Text("activa"))
        .description("Solo las ofertas \"Activas\" se muestran públicamente"),
        Field::date("fecha_publicacion")
            .label("Fecha de publicación")
            .default_value(DefaultValue::Now),
        Field::date("fecha_cierre")
            .label("Fecha de cierre")
            .description("Hasta cuándo se aceptan postulaciones"),
        Field::checkbox("destacada")
            .label("¿Destacar en homepage?")
            .default_value(DefaultValue::Bool(false))
            .description("Las ofertas destacadas aparecen primero"),
        Field::checkbox("urgente")
            .label("¿Marcar como urgente?")
            .default_value(DefaultValue::Bool(false))
            .description("Se mostrará una badge de \"Urgente\""),
        Field::slug("titulo")
            .label("Slug (URL amigable)")
            .description("Se genera automáticamente del título"),
        Field::number("vistas")
            .label("Número de vistas")
            .default_value(DefaultValue::Number(0))
            .read_only()
            .description("Se actualiza automáticamente"),
        Field::number("postulaciones_count")
            .label("Número de postulaciones")
            .default_value(DefaultValue::Number(0))
            .read_only()
            .description("Se actualiza desde el backend"),
    ],
};

pub const STATIC_CONTENT: Collection = Collection {
    slug: "static-content",
    use_as_title: "titulo",
    default_columns: &[],
    description: None,
    access: Access::PublicRead,
    fields: &[
        Field::text("titulo").required(),
        Field::text("slug")
            .required()
            .unique()
            .placeholder("sobre-nosotros, faqs, como-postular"),
        Field::rich_text("contenido").required(),
        Field::select(
            "tipo",
            &[
                SelectOption::new("Página", "pagina"),
                SelectOption::new("FAQ", "faq"),
                SelectOption::new("Noticia", "noticia"),
            ],
        )
        .required(),
        Field::relationship("proyecto", "projects").required(),
    ],
};

pub const ALL: &[Collection] = &[COMPANIES, COURSES, OFFERS, STATIC_CONTENT];

pub fn find(slug: &str) -> Option<&'static Collection> {
    ALL.iter().find(|c| c.slug == slug)
}
